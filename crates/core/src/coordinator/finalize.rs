//! Dispatch of a finalized query.
//!
//! A finalized query goes either to a handler supplied by the host page or,
//! when none was given, to default navigation towards the product listing.

use sf_protocol::ListingRoute;
use std::fmt;

/// Receives navigation requests issued by default navigation.
pub trait Navigator: Send {
    /// Navigate to `href`, e.g. `/admin/products?q=shoes`.
    fn navigate(&mut self, href: &str);
}

/// Anything that can take an href, such as a closure forwarding to a channel.
impl<F> Navigator for F
where
    F: FnMut(&str) + Send,
{
    fn navigate(&mut self, href: &str) {
        self(href)
    }
}

/// Submit handler supplied by the host page.
pub type SubmitHandler = Box<dyn FnMut(&str) + Send>;

/// How a finalized query is dispatched. Chosen once at construction.
pub enum Finalizer {
    /// Caller-supplied handler receives the query.
    Handler(SubmitHandler),
    /// Navigate to `listing_path` with the query in the `q` parameter.
    Navigate {
        navigator: Box<dyn Navigator>,
        listing_path: String,
    },
}

impl Finalizer {
    pub fn handler<F>(f: F) -> Self
    where
        F: FnMut(&str) + Send + 'static,
    {
        Finalizer::Handler(Box::new(f))
    }

    pub fn navigate<N>(navigator: N, listing_path: impl Into<String>) -> Self
    where
        N: Navigator + 'static,
    {
        Finalizer::Navigate {
            navigator: Box::new(navigator),
            listing_path: listing_path.into(),
        }
    }

    /// Dispatch `query`.
    ///
    /// Default navigation with an empty query goes to the bare listing path.
    pub fn finalize(&mut self, query: &str) {
        match self {
            Finalizer::Handler(handler) => handler(query),
            Finalizer::Navigate {
                navigator,
                listing_path,
            } => {
                let href = ListingRoute::new(listing_path.as_str())
                    .with_query(query)
                    .to_href();
                tracing::debug!(%href, "default navigation");
                navigator.navigate(&href);
            }
        }
    }
}

impl fmt::Debug for Finalizer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Finalizer::Handler(_) => f.write_str("Finalizer::Handler"),
            Finalizer::Navigate { listing_path, .. } => f
                .debug_struct("Finalizer::Navigate")
                .field("listing_path", listing_path)
                .finish(),
        }
    }
}

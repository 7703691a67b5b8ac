//! Product listing widget.
//!
//! Renders one page of search results as a table with the selected row
//! highlighted, plus the pagination footer shown below it.

use ratatui::layout::Constraint;
use ratatui::layout::Rect;
use ratatui::style::Color;
use ratatui::style::Modifier;
use ratatui::style::Style;
use ratatui::text::Line;
use ratatui::text::Span;
use ratatui::widgets::Block;
use ratatui::widgets::Borders;
use ratatui::widgets::Cell;
use ratatui::widgets::Paragraph;
use ratatui::widgets::Row;
use ratatui::widgets::Table;
use ratatui::widgets::TableState;
use ratatui::Frame;
use sf_protocol::Pagination;
use sf_protocol::Product;

/// Renders the product table.
///
/// # Arguments
/// * `frame` - The frame to render into
/// * `area` - The area to render the table in
/// * `products` - Products on the current page
/// * `selected` - Index of the selected product
/// * `focused` - Whether the list has keyboard focus
pub fn render_product_list(
    frame: &mut Frame,
    area: Rect,
    products: &[Product],
    selected: usize,
    focused: bool,
) {
    let border_style = if focused {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default().fg(Color::White)
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .title("Products")
        .border_style(border_style);

    if products.is_empty() {
        let empty = Paragraph::new("No products found.")
            .style(Style::default().fg(Color::DarkGray))
            .block(block);
        frame.render_widget(empty, area);
        return;
    }

    let rows: Vec<Row> = products
        .iter()
        .map(|p| {
            Row::new(vec![
                Cell::from(p.display_name().to_string()),
                Cell::from(p.brand.clone().unwrap_or_default()),
                Cell::from(p.sport.clone().unwrap_or_default()),
                Cell::from(price_line(p)),
            ])
        })
        .collect();

    let header = Row::new(vec![
        Cell::from("Name"),
        Cell::from("Brand"),
        Cell::from("Sport"),
        Cell::from("Price"),
    ])
    .style(
        Style::default()
            .add_modifier(Modifier::BOLD)
            .fg(Color::Cyan),
    );

    let widths = [
        Constraint::Percentage(45),
        Constraint::Percentage(15),
        Constraint::Percentage(15),
        Constraint::Min(18),
    ];

    let table = Table::new(rows, widths)
        .header(header)
        .block(block)
        .row_highlight_style(
            Style::default()
                .bg(Color::Blue)
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol(">> ");

    let mut table_state = TableState::default();
    table_state.select(Some(selected.min(products.len() - 1)));

    frame.render_stateful_widget(table, area, &mut table_state);
}

/// Price cell: the current price, followed by the struck-through original
/// price when the product is discounted.
fn price_line(product: &Product) -> Line<'static> {
    let mut spans = vec![Span::styled(
        format_price(product.price),
        Style::default().fg(Color::Green),
    )];
    if let Some(original) = product.discounted_from() {
        spans.push(Span::raw(" "));
        spans.push(Span::styled(
            format_price(original),
            Style::default()
                .fg(Color::DarkGray)
                .add_modifier(Modifier::CROSSED_OUT),
        ));
    }
    Line::from(spans)
}

fn format_price(price: f64) -> String {
    format!("${price:.2}")
}

/// Footer line with the page position and key hints.
pub fn pagination_line(pagination: &Pagination) -> Line<'static> {
    let enabled = Style::default().fg(Color::White);
    let disabled = Style::default().fg(Color::DarkGray);
    Line::from(vec![
        Span::styled(
            "[ prev",
            if pagination.has_prev_page { enabled } else { disabled },
        ),
        Span::raw(format!(
            "  Page {} of {}  ",
            pagination.current_page, pagination.total_pages
        )),
        Span::styled(
            "next ]",
            if pagination.has_next_page { enabled } else { disabled },
        ),
        Span::styled(
            "   Tab: switch focus  /: search  q: quit",
            Style::default().fg(Color::DarkGray),
        ),
    ])
}

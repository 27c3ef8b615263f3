use ratatui::{
    layout::{Constraint, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Paragraph, Row, Table},
    Frame,
};

use crate::ui::app::App;
use crate::ui::theme;
use crate::ui::util::{format_signed_amount, truncate};

pub(crate) fn render(f: &mut Frame, area: Rect, app: &App) {
    let title = format!(" Transactions ({}) ", app.transactions.len());
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme::OVERLAY))
        .title(Span::styled(title, theme::title_style()));

    if app.is_empty() {
        let msg = vec![
            Line::from(""),
            Line::from(Span::styled("No transactions yet", theme::dim_style())),
        ];
        f.render_widget(Paragraph::new(msg).centered().block(block), area);
        return;
    }

    let header = Row::new(
        ["ID", "Date", "Title", "Category", "Amount", "Description"]
            .iter()
            .map(|h| Cell::from(*h).style(theme::header_style())),
    );

    let rows: Vec<Row> = app
        .transactions
        .iter()
        .enumerate()
        .skip(app.transaction_scroll)
        .take(area.height.saturating_sub(3) as usize)
        .map(|(i, txn)| {
            let style = if i == app.transaction_index {
                theme::selected_style()
            } else if i % 2 == 1 {
                theme::alt_row_style()
            } else {
                theme::normal_style()
            };
            let amount = if i == app.transaction_index {
                Span::raw(format_signed_amount(txn.amount))
            } else {
                Span::styled(
                    format_signed_amount(txn.amount),
                    theme::amount_style(txn.amount),
                )
            };

            Row::new(vec![
                Cell::from(txn.id.map(|id| id.to_string()).unwrap_or_default()),
                Cell::from(txn.date.clone()),
                Cell::from(truncate(&txn.title, 30)),
                Cell::from(truncate(&txn.category, 16)),
                Cell::from(amount),
                Cell::from(truncate(txn.description.as_deref().unwrap_or(""), 40)),
            ])
            .style(style)
        })
        .collect();

    let widths = [
        Constraint::Length(6),
        Constraint::Length(11),
        Constraint::Min(16),
        Constraint::Length(17),
        Constraint::Length(13),
        Constraint::Min(10),
    ];

    let table = Table::new(rows, widths).header(header).block(block);
    f.render_widget(table, area);
}

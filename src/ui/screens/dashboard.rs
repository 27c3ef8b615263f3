use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Bar, BarChart, BarGroup, Block, Borders, Cell, Paragraph, Row, Table},
    Frame,
};
use rust_decimal::Decimal;

use crate::ui::app::App;
use crate::ui::theme;
use crate::ui::util::{bar_value, format_amount, format_signed_amount, short_month, truncate};

const EMPTY_MESSAGE: &str = "No transactions yet. Add some transactions to see insights!";
const MONTH_BAR_WIDTH: u16 = 7;

pub(crate) fn render(f: &mut Frame, area: Rect, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(5),      // Summary cards
            Constraint::Percentage(50), // Charts
            Constraint::Min(6),         // Recent + analysis
        ])
        .split(area);

    render_summary_cards(f, chunks[0], app);

    if app.is_empty() {
        let rest = chunks[1].union(chunks[2]);
        let msg = Paragraph::new(vec![
            Line::from(""),
            Line::from(Span::styled(EMPTY_MESSAGE, theme::dim_style())),
            Line::from(""),
            Line::from(Span::styled(
                "Try `clifin add` or `clifin seed`, then press r to reload",
                theme::dim_style(),
            )),
        ])
        .centered()
        .block(panel(" Insights "));
        f.render_widget(msg, rest);
        return;
    }

    let charts = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(chunks[1]);
    render_category_balances(f, charts[0], app);
    render_monthly_trend(f, charts[1], app);

    let lower = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
        .split(chunks[2]);
    render_recent(f, lower[0], app);
    render_category_analysis(f, lower[1], app);
}

fn panel(title: &str) -> Block<'_> {
    Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme::OVERLAY))
        .title(Span::styled(title, theme::title_style()))
}

fn render_summary_cards(f: &mut Frame, area: Rect, app: &App) {
    let cards = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Ratio(1, 4); 4])
        .split(area);

    let summary = &app.summary;
    render_card(
        f,
        cards[0],
        "Total Balance",
        format_amount(app.total_balance),
        theme::balance_color(app.total_balance),
        String::new(),
    );
    render_card(
        f,
        cards[1],
        "Revenue",
        format_amount(summary.total_revenue),
        theme::GREEN,
        format!("{} txns", summary.revenue_count),
    );
    render_card(
        f,
        cards[2],
        "Expenses",
        format_amount(summary.total_expenses),
        theme::RED,
        format!("{} txns", summary.expense_count),
    );
    render_card(
        f,
        cards[3],
        "Total Transactions",
        summary.transaction_count.to_string(),
        theme::ACCENT,
        format!("{} categories", app.balance_by_category.len()),
    );
}

fn render_card(
    f: &mut Frame,
    area: Rect,
    title: &str,
    value: String,
    color: Color,
    subtitle: String,
) {
    let title = format!(" {title} ");
    let text = Paragraph::new(vec![
        Line::from(Span::styled(
            value,
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(subtitle, theme::dim_style())),
    ])
    .centered()
    .block(panel(&title));

    f.render_widget(text, area);
}

/// Horizontal bars, one per category, largest balance first.
fn render_category_balances(f: &mut Frame, area: Rect, app: &App) {
    let fits = area.height.saturating_sub(2) as usize;
    let bars: Vec<Bar> = app
        .balance_by_category
        .iter()
        .take(fits)
        .map(|(name, amount)| signed_bar(truncate(name, 14), *amount))
        .collect();

    let chart = BarChart::default()
        .block(panel(" Balance by Category "))
        .direction(Direction::Horizontal)
        .data(BarGroup::default().bars(&bars))
        .bar_width(1)
        .bar_gap(0);

    f.render_widget(chart, area);
}

/// Net per month, newest months kept when the panel is narrow.
fn render_monthly_trend(f: &mut Frame, area: Rect, app: &App) {
    let fits = (area.width.saturating_sub(2) / (MONTH_BAR_WIDTH + 1)).max(1) as usize;
    let months = &app.summary.monthly_net;
    let shown = &months[months.len().saturating_sub(fits)..];

    let bars: Vec<Bar> = shown
        .iter()
        .map(|(month, net)| signed_bar(short_month(month), *net))
        .collect();

    let chart = BarChart::default()
        .block(panel(" Monthly Trends (net) "))
        .data(BarGroup::default().bars(&bars))
        .bar_width(MONTH_BAR_WIDTH)
        .bar_gap(1);

    f.render_widget(chart, area);
}

/// Bar length is the magnitude; colour and text carry the sign.
fn signed_bar<'a>(label: String, amount: Decimal) -> Bar<'a> {
    let color = theme::balance_color(amount);
    Bar::default()
        .value(bar_value(amount))
        .label(Line::from(label))
        .text_value(format_signed_amount(amount))
        .style(Style::default().fg(color))
        .value_style(Style::default().fg(theme::HEADER_BG).bg(color))
}

fn render_recent(f: &mut Frame, area: Rect, app: &App) {
    let header = Row::new(
        ["Date", "Title", "Category", "Amount"]
            .iter()
            .map(|h| Cell::from(*h).style(theme::header_style())),
    );

    let rows: Vec<Row> = app
        .recent()
        .iter()
        .enumerate()
        .map(|(i, txn)| {
            let style = if i % 2 == 1 {
                theme::alt_row_style()
            } else {
                theme::normal_style()
            };
            Row::new(vec![
                Cell::from(txn.date.clone()),
                Cell::from(truncate(&txn.title, 24)),
                Cell::from(truncate(&txn.category, 14)),
                Cell::from(Span::styled(
                    format_signed_amount(txn.amount),
                    theme::amount_style(txn.amount),
                )),
            ])
            .style(style)
        })
        .collect();

    let widths = [
        Constraint::Length(11),
        Constraint::Min(12),
        Constraint::Length(15),
        Constraint::Length(13),
    ];
    let table = Table::new(rows, widths)
        .header(header)
        .block(panel(" Recent Transactions "));

    f.render_widget(table, area);
}

fn render_category_analysis(f: &mut Frame, area: Rect, app: &App) {
    let summary = &app.summary;
    let mut lines = Vec::new();

    lines.push(Line::from(Span::styled(" Revenue", theme::section_style())));
    push_breakdown(
        &mut lines,
        &summary.revenue_by_category,
        summary.total_revenue,
        theme::GREEN,
    );
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(" Expenses", theme::section_style())));
    push_breakdown(
        &mut lines,
        &summary.expenses_by_category,
        summary.total_expenses,
        theme::RED,
    );

    f.render_widget(
        Paragraph::new(lines).block(panel(" Category Analysis ")),
        area,
    );
}

fn push_breakdown(
    lines: &mut Vec<Line<'static>>,
    breakdown: &[(String, Decimal)],
    total: Decimal,
    color: Color,
) {
    if breakdown.is_empty() {
        lines.push(Line::from(Span::styled("  none", theme::dim_style())));
        return;
    }
    for (name, amount) in breakdown {
        lines.push(Line::from(vec![
            Span::styled(format!("  {:<16}", truncate(name, 16)), theme::normal_style()),
            Span::styled(
                format!("{:>13}", format_amount(*amount)),
                Style::default().fg(color),
            ),
            Span::styled(format!(" {:>6}", share(*amount, total)), theme::dim_style()),
        ]));
    }
}

fn share(part: Decimal, total: Decimal) -> String {
    if total.is_zero() {
        return "-".to_string();
    }
    format!("{:.1}%", part / total * Decimal::ONE_HUNDRED)
}

#[cfg(test)]
#[path = "dashboard_tests.rs"]
mod tests;

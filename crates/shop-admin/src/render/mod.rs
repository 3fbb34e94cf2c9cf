//! # Render Surface
//!
//! Pure functions from board state to a view model, plus a plain-text
//! renderer for the terminal. Nothing here talks to the network.

use crate::model::{Order, OrderId, OrderStatus, Product};
use crate::order_board::{buckets, BoardSnapshot};
use chrono::Local;
use std::fmt::Write;

pub const LOADING_MESSAGE: &str = "Loading orders...";
pub const EMPTY_MESSAGE: &str = "There are no orders yet.";

#[derive(Debug, Clone, PartialEq)]
pub enum BoardView {
    Loading,
    Empty,
    Sections(Vec<SectionView>),
}

#[derive(Debug, Clone, PartialEq)]
pub struct SectionView {
    pub status: OrderStatus,
    pub heading: String,
    pub color: &'static str,
    pub cards: Vec<OrderCard>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct OrderCard {
    pub id: OrderId,
    pub user_line: String,
    pub total: String,
    pub created_at: String,
    pub background: &'static str,
    pub items: Vec<String>,
    pub control: StatusControl,
}

/// Terminal orders get no control at all.
#[derive(Debug, Clone, PartialEq)]
pub enum StatusControl {
    Choice {
        current: OrderStatus,
        options: [OrderStatus; 4],
    },
    Fixed(OrderStatus),
}

pub fn status_color(status: OrderStatus) -> &'static str {
    match status {
        OrderStatus::Pending => "#FFB300",
        OrderStatus::Delivering => "#03A9F4",
        OrderStatus::Done => "#4CAF50",
        OrderStatus::Cancelled => "#f44336",
    }
}

pub fn card_background(status: OrderStatus) -> &'static str {
    match status {
        OrderStatus::Pending => "#FFF8E1",
        OrderStatus::Delivering => "#E1F5FE",
        _ => "white",
    }
}

pub fn build_view(snapshot: &BoardSnapshot) -> BoardView {
    if snapshot.loading {
        return BoardView::Loading;
    }
    if snapshot.orders.is_empty() {
        return BoardView::Empty;
    }
    let sections = buckets(&snapshot.orders)
        .into_iter()
        .map(|bucket| SectionView {
            status: bucket.status,
            heading: format!("{} Orders", bucket.status),
            color: status_color(bucket.status),
            cards: bucket.orders.into_iter().map(order_card).collect(),
        })
        .collect();
    BoardView::Sections(sections)
}

fn order_card(order: &Order) -> OrderCard {
    let control = if order.status.is_terminal() {
        StatusControl::Fixed(order.status)
    } else {
        StatusControl::Choice {
            current: order.status,
            options: OrderStatus::ALL,
        }
    };
    OrderCard {
        id: order.id,
        user_line: format!("{} ({})", order.user.username, order.user.email),
        total: format!("${:.2}", order.total_amount),
        created_at: order
            .created_at
            .with_timezone(&Local)
            .format("%Y-%m-%d %H:%M")
            .to_string(),
        background: card_background(order.status),
        items: order
            .items
            .iter()
            .map(|item| {
                format!(
                    "{} x {} (${:.2})",
                    item.product.name, item.quantity, item.price
                )
            })
            .collect(),
        control,
    }
}

pub fn render_text(view: &BoardView) -> String {
    let mut out = String::new();
    match view {
        BoardView::Loading => out.push_str(LOADING_MESSAGE),
        BoardView::Empty => out.push_str(EMPTY_MESSAGE),
        BoardView::Sections(sections) => {
            for (i, section) in sections.iter().enumerate() {
                if i > 0 {
                    out.push('\n');
                }
                let _ = writeln!(out, "== {} ==", section.heading);
                for card in &section.cards {
                    let _ = writeln!(out, "Order ID: {}", card.id);
                    let _ = writeln!(out, "  User: {}", card.user_line);
                    let _ = writeln!(out, "  Total: {}", card.total);
                    let _ = writeln!(out, "  Created: {}", card.created_at);
                    for item in &card.items {
                        let _ = writeln!(out, "  - {item}");
                    }
                    match &card.control {
                        StatusControl::Choice { current, options } => {
                            let names: Vec<&str> = options.iter().map(|s| s.as_str()).collect();
                            let _ = writeln!(out, "  Status: {current} [{}]", names.join("|"));
                        }
                        StatusControl::Fixed(status) => {
                            let _ = writeln!(out, "  Status: {status}");
                        }
                    }
                }
            }
        }
    }
    out.trim_end().to_string()
}

/// One line per product: id, code, name, prices.
pub fn render_products(products: &[Product]) -> String {
    if products.is_empty() {
        return "No products.".to_string();
    }
    let mut out = String::new();
    for product in products {
        let _ = write!(
            out,
            "{:>4}  {:<10}  {:<24}  {:>9.2}  {:>9.2}",
            product.id.0, product.code, product.name, product.original_price, product.sale_price
        );
        if product.on_sale_flag {
            out.push_str("  on sale");
        }
        out.push('\n');
    }
    out.trim_end().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::order_board::grouping::fixtures::order;

    fn loaded(orders: Vec<Order>) -> BoardSnapshot {
        BoardSnapshot {
            orders,
            loading: false,
        }
    }

    #[test]
    fn test_loading_and_empty_messages() {
        let loading = BoardSnapshot {
            orders: vec![order(1, OrderStatus::Pending)],
            loading: true,
        };
        assert_eq!(render_text(&build_view(&loading)), "Loading orders...");

        let empty = build_view(&loaded(vec![]));
        assert_eq!(empty, BoardView::Empty);
        assert_eq!(render_text(&empty), "There are no orders yet.");
    }

    #[test]
    fn test_terminal_orders_have_no_control() {
        let view = build_view(&loaded(vec![
            order(1, OrderStatus::Pending),
            order(2, OrderStatus::Done),
        ]));

        let BoardView::Sections(sections) = view else {
            panic!("expected sections");
        };
        assert_eq!(sections.len(), 2);
        assert_eq!(sections[0].heading, "PENDING Orders");
        assert_eq!(sections[0].color, "#FFB300");
        assert_eq!(
            sections[0].cards[0].control,
            StatusControl::Choice {
                current: OrderStatus::Pending,
                options: OrderStatus::ALL,
            }
        );
        assert_eq!(sections[1].heading, "DONE Orders");
        assert_eq!(sections[1].cards[0].control, StatusControl::Fixed(OrderStatus::Done));
        assert_eq!(sections[1].cards[0].background, "white");
    }

    #[test]
    fn test_terminal_status_is_printed_without_choices() {
        let view = build_view(&loaded(vec![order(8, OrderStatus::Cancelled)]));

        let text = render_text(&view);

        assert!(text.starts_with("== CANCELLED Orders =="));
        assert!(text.contains("Status: CANCELLED"));
        assert!(!text.contains("[PENDING|DELIVERING|DONE|CANCELLED]"));
    }

    #[test]
    fn test_card_contents() {
        let view = build_view(&loaded(vec![order(5, OrderStatus::Delivering)]));
        let BoardView::Sections(sections) = view else {
            panic!("expected sections");
        };
        let card = &sections[0].cards[0];
        assert_eq!(card.background, "#E1F5FE");
        assert_eq!(card.user_line, "mira (mira@shop.test)");
        assert_eq!(card.total, "$59.50");
        assert_eq!(card.items, vec!["Rye Bread x 2 ($29.75)".to_string()]);

        let text = render_text(&BoardView::Sections(sections));
        assert!(text.starts_with("== DELIVERING Orders =="));
        assert!(text.contains("Order ID: 5"));
        assert!(text.contains("Status: DELIVERING [PENDING|DELIVERING|DONE|CANCELLED]"));
    }
}

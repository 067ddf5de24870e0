//! Service layer for Planshare
//!
//! The service layer provides business logic on top of the storage layer:
//! status derivation, board grouping, member administration with audit
//! logging, and reminder hand-off.

pub mod board;
pub mod member;
pub mod reminder;
pub mod status;

pub use board::{build_board, plan_header, BoardRow, PlanGroup};
pub use member::MemberService;
pub use reminder::{build_message, Delivery, MessagingChannel, Reminder, ReminderService, WhatsAppLink};
pub use status::{current_period, evaluate};

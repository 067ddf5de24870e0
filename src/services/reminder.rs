//! Payment reminders
//!
//! Builds a localized reminder for a member who owes money and hands it to a
//! messaging channel. The only channel shipped is a WhatsApp share link; the
//! operator opens it and picks the recipient, so delivery is never confirmed.

use chrono::NaiveDate;

use crate::config::settings::{Locale, Settings};
use crate::display::status::status_text;
use crate::error::{PlanshareError, PlanshareResult};
use crate::models::{Member, MemberStatus};
use crate::storage::Storage;

use super::status;

/// A message ready to be handed to a channel
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reminder {
    /// Phone number or handle; `None` lets the operator pick the contact
    pub recipient: Option<String>,
    pub message: String,
}

/// What a channel did with a reminder
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Delivery {
    pub channel: &'static str,
    /// Link or reference the operator follows to finish sending
    pub link: String,
}

/// A way of getting a reminder to a member
pub trait MessagingChannel {
    fn name(&self) -> &'static str;

    fn deliver(&self, reminder: &Reminder) -> PlanshareResult<Delivery>;
}

/// Share link of the form `https://wa.me/?text=<message>`
pub struct WhatsAppLink {
    base_url: String,
}

impl WhatsAppLink {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }

    pub fn from_settings(settings: &Settings) -> Self {
        Self::new(settings.whatsapp_base_url.clone())
    }
}

impl Default for WhatsAppLink {
    fn default() -> Self {
        Self::new("https://wa.me/")
    }
}

impl MessagingChannel for WhatsAppLink {
    fn name(&self) -> &'static str {
        "whatsapp"
    }

    fn deliver(&self, reminder: &Reminder) -> PlanshareResult<Delivery> {
        let base = self.base_url.trim();
        if !(base.starts_with("https://") || base.starts_with("http://")) {
            return Err(PlanshareError::Messaging(format!(
                "Share link base must be an http(s) URL, got '{}'",
                base
            )));
        }
        if reminder.message.trim().is_empty() {
            return Err(PlanshareError::Messaging("Reminder message is empty".into()));
        }

        let base = base.trim_end_matches('/');
        let recipient: String = reminder
            .recipient
            .as_deref()
            .unwrap_or("")
            .chars()
            .filter(|c| c.is_ascii_digit())
            .collect();

        Ok(Delivery {
            channel: self.name(),
            link: format!(
                "{}/{}?text={}",
                base,
                recipient,
                urlencoding::encode(&reminder.message)
            ),
        })
    }
}

/// Reminder text for a member in the given language
pub fn build_message(
    member: &Member,
    status: &MemberStatus,
    locale: Locale,
    currency_symbol: &str,
) -> String {
    let status = status_text(status, locale, currency_symbol);
    let balance = member.balance.format_with_symbol(currency_symbol);
    match locale {
        Locale::Es => format!(
            "Hola {}, sobre el plan {}: {}. Saldo actual: {}.",
            member.name,
            member.service.name(),
            status,
            balance
        ),
        Locale::En => format!(
            "Hi {}, about the {} plan: {}. Current balance: {}.",
            member.name,
            member.service.name(),
            status,
            balance
        ),
    }
}

/// Service that prepares and sends reminders
pub struct ReminderService<'a> {
    storage: &'a Storage,
    settings: &'a Settings,
}

impl<'a> ReminderService<'a> {
    pub fn new(storage: &'a Storage, settings: &'a Settings) -> Self {
        Self { storage, settings }
    }

    /// Build the reminder for a member who owes money
    pub fn prepare(&self, member: &Member, today: NaiveDate) -> PlanshareResult<Reminder> {
        let status = status::evaluate(member, today)?;
        if !status.requires_collection_action() {
            return Err(PlanshareError::Validation(format!(
                "{} does not owe anything; no reminder needed",
                member.name
            )));
        }

        Ok(Reminder {
            recipient: None,
            message: build_message(
                member,
                &status,
                self.settings.locale,
                &self.settings.currency_symbol,
            ),
        })
    }

    /// Prepare a reminder, hand it to `channel` and record the hand-off
    pub fn send(
        &self,
        member: &Member,
        today: NaiveDate,
        channel: &dyn MessagingChannel,
    ) -> PlanshareResult<(Reminder, Delivery)> {
        let reminder = self.prepare(member, today)?;
        let delivery = channel.deliver(&reminder)?;

        self.storage.log_remind(
            member.id.to_string(),
            member.name.clone(),
            member.service.to_string(),
            format!("{}: {}", delivery.channel, delivery.link),
        )?;
        tracing::debug!(member = %member.name, channel = delivery.channel, "reminder handed off");

        Ok((reminder, delivery))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::audit::Operation;
    use crate::config::paths::PlansharePaths;
    use crate::models::{Money, Service};
    use tempfile::TempDir;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn debtor() -> Member {
        Member::with_balance(
            "Bea",
            Service::YouTube,
            Money::from_units(100),
            Money::from_units(-50),
        )
    }

    fn create_test_storage() -> (TempDir, Storage) {
        let temp_dir = TempDir::new().unwrap();
        let paths = PlansharePaths::with_base_dir(temp_dir.path().to_path_buf());
        let storage = Storage::new(paths).unwrap();
        (temp_dir, storage)
    }

    #[test]
    fn test_spanish_message() {
        let member = debtor();
        let status = MemberStatus::Debt {
            owed: Money::from_units(50),
        };
        assert_eq!(
            build_message(&member, &status, Locale::Es, "$"),
            "Hola Bea, sobre el plan YouTube: ⛔ DEBE $50. Saldo actual: -$50."
        );
        assert_eq!(
            build_message(&member, &status, Locale::En, "$"),
            "Hi Bea, about the YouTube plan: ⛔ OWES $50. Current balance: -$50."
        );
    }

    #[test]
    fn test_whatsapp_link_encodes_message() {
        let reminder = Reminder {
            recipient: None,
            message: "Hola Bea, saldo: -$50.".into(),
        };
        let delivery = WhatsAppLink::default().deliver(&reminder).unwrap();
        assert_eq!(delivery.channel, "whatsapp");
        assert_eq!(
            delivery.link,
            "https://wa.me/?text=Hola%20Bea%2C%20saldo%3A%20-%2450."
        );
    }

    #[test]
    fn test_whatsapp_link_with_recipient() {
        let reminder = Reminder {
            recipient: Some("+52 55 1234 5678".into()),
            message: "Hola".into(),
        };
        let delivery = WhatsAppLink::new("https://wa.me").deliver(&reminder).unwrap();
        assert_eq!(delivery.link, "https://wa.me/525512345678?text=Hola");
    }

    #[test]
    fn test_whatsapp_link_rejects_bad_base() {
        let reminder = Reminder {
            recipient: None,
            message: "Hola".into(),
        };
        let err = WhatsAppLink::new("wa.me").deliver(&reminder).unwrap_err();
        assert!(matches!(err, PlanshareError::Messaging(_)));
    }

    #[test]
    fn test_reminder_requires_debt() {
        let (_temp_dir, storage) = create_test_storage();
        let settings = Settings::default();
        let service = ReminderService::new(&storage, &settings);

        let paid = Member::with_balance(
            "Ana",
            Service::Spotify,
            Money::from_units(100),
            Money::from_units(200),
        );
        let err = service.prepare(&paid, date(2025, 3, 10)).unwrap_err();
        assert!(err.is_validation());
    }

    #[test]
    fn test_send_records_audit_entry() {
        let (_temp_dir, storage) = create_test_storage();
        let settings = Settings::default();
        let service = ReminderService::new(&storage, &settings);

        let (reminder, delivery) = service
            .send(&debtor(), date(2025, 3, 10), &WhatsAppLink::from_settings(&settings))
            .unwrap();
        assert!(reminder.message.starts_with("Hola Bea"));
        assert!(delivery.link.starts_with("https://wa.me/?text=Hola%20Bea"));

        let entries = storage.audit().read_all().unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].operation, Operation::Remind);
    }
}

//! Shortcut commands (e.g. `/don`) that forward to `/donate`.

use tracing::{info, warn};

use crate::command::{canonical_command, parse_amount, DonationCommand};
use crate::error::DonationErrorKind;
use crate::flow::{DonationFlow, DonationOutcome};
use crate::notices::{markdown_escape, Notice};

/// What happened to the donation behind an alias command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DonationStatus {
    Paid,
    AwaitingAmount,
    Failed(DonationErrorKind),
}

/// Report of a handled alias command.
///
/// Receiving a report means the alias consumed the command and the caller
/// should stop processing it, whatever `donation` says. The donation's own
/// errors are logged by the flow, not returned.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AliasReport {
    pub donation: DonationStatus,
}

impl AliasReport {
    pub fn payment_succeeded(&self) -> bool {
        self.donation == DonationStatus::Paid
    }
}

impl DonationFlow {
    /// Handle an alias such as `/don 100`.
    ///
    /// Tells the sender where the donation goes, rewrites the command to
    /// `/donate [amount]` and runs the regular flow.
    pub async fn handle_alias(&self, mut command: DonationCommand) -> AliasReport {
        let amount = parse_amount(&command.text);

        let notice = markdown_escape(&self.text(Notice::RecipientNotice));
        self.try_send(command.sender.private_chat(), &notice).await;

        command.text = canonical_command(amount);
        info!(user = %command.sender, command = %command.text, "Forwarding donation alias");

        let donation = match self.donate(&command).await {
            Ok(DonationOutcome::Paid { .. }) => DonationStatus::Paid,
            Ok(DonationOutcome::AwaitingAmount) => DonationStatus::AwaitingAmount,
            Err(e) => {
                warn!(user = %command.sender, kind = ?e.kind(), "Donation behind alias did not complete");
                DonationStatus::Failed(e.kind())
            }
        };
        AliasReport { donation }
    }
}

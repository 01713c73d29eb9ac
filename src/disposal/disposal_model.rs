use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;

use crate::money::MonetaryAmount;

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum DisposalType {
    Sale,
    Scrap,
    Donation,
    Transfer,
    LostStolen,
    InsuranceClaim,
}

/// The realized result of a disposal, recorded on the asset when it
/// reaches its terminal state.
///
/// `gain_loss` is proceeds minus net book value at disposal. A disposal
/// without proceeds writes the full net book value off as a loss, except
/// for transfers, which recognize no gain or loss.
#[skip_serializing_none]
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct DisposalOutcome {
    pub disposal_type: DisposalType,
    pub disposal_date: NaiveDate,
    pub sale_amount: Option<MonetaryAmount>,
    pub net_book_value_at_disposal: MonetaryAmount,
    pub gain_loss: MonetaryAmount,
    /// Buyer on a sale, receiving entity on a transfer.
    pub counterparty: Option<String>,
    pub invoice_reference: Option<String>,
    pub reason: Option<String>,
}

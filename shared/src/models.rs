use sea_orm::Set;
use serde::{Deserialize, Serialize};

use crate::entity::quotes;

/// The exchange API wraps each quote in a single top-level key named after
/// the currency pair.
#[derive(Debug, Clone, Deserialize)]
pub struct QuoteEnvelope {
    #[serde(rename = "USDBRL")]
    pub usdbrl: CurrencyQuote,
}

/// One USD-BRL snapshot exactly as the exchange API ships it. Every value is
/// decimal-as-text; nothing is parsed into numbers anywhere in the pipeline.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CurrencyQuote {
    pub code: String,
    pub codein: String,
    pub name: String,
    pub high: String,
    pub low: String,
    #[serde(rename = "varBid")]
    pub var_bid: String,
    #[serde(rename = "pctChange")]
    pub pct_change: String,
    pub bid: String,
    pub ask: String,
    pub timestamp: String,
    pub create_date: String,
}

/// The single field the quote service exposes downstream.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BidResponse {
    pub bid: String,
}

impl From<CurrencyQuote> for quotes::ActiveModel {
    fn from(quote: CurrencyQuote) -> Self {
        quotes::ActiveModel {
            code: Set(quote.code),
            codein: Set(quote.codein),
            name: Set(quote.name),
            high: Set(quote.high),
            low: Set(quote.low),
            var_bid: Set(quote.var_bid),
            pct_change: Set(quote.pct_change),
            bid: Set(quote.bid),
            ask: Set(quote.ask),
            timestamp: Set(quote.timestamp),
            create_date: Set(quote.create_date),
            ..Default::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PAYLOAD: &str = r#"{
        "USDBRL": {
            "code": "USD",
            "codein": "BRL",
            "name": "Dólar Americano/Real Brasileiro",
            "high": "5.2835",
            "low": "5.2289",
            "varBid": "0.0047",
            "pctChange": "0.09",
            "bid": "5.25",
            "ask": "5.2538",
            "timestamp": "1719242263",
            "create_date": "2024-06-24 11:37:43"
        }
    }"#;

    #[test]
    fn decodes_the_external_payload() {
        let envelope: QuoteEnvelope = serde_json::from_str(PAYLOAD).unwrap();
        let quote = envelope.usdbrl;

        assert_eq!(quote.code, "USD");
        assert_eq!(quote.codein, "BRL");
        assert_eq!(quote.var_bid, "0.0047");
        assert_eq!(quote.pct_change, "0.09");
        assert_eq!(quote.bid, "5.25");
        assert_eq!(quote.create_date, "2024-06-24 11:37:43");
    }

    #[test]
    fn missing_field_is_a_decode_error() {
        let payload = r#"{"USDBRL": {"code": "USD", "codein": "BRL"}}"#;
        assert!(serde_json::from_str::<QuoteEnvelope>(payload).is_err());
    }

    #[test]
    fn missing_envelope_key_is_a_decode_error() {
        let payload = PAYLOAD.replace("USDBRL", "EURBRL");
        assert!(serde_json::from_str::<QuoteEnvelope>(&payload).is_err());
    }

    #[test]
    fn bid_response_wire_shape() {
        let response = BidResponse {
            bid: "5.25".to_string(),
        };
        assert_eq!(
            serde_json::to_string(&response).unwrap(),
            r#"{"bid":"5.25"}"#
        );

        let parsed: BidResponse = serde_json::from_str(r#"{"bid":"5.25"}"#).unwrap();
        assert_eq!(parsed.bid, "5.25");
    }

    #[test]
    fn active_model_copies_every_field() {
        let envelope: QuoteEnvelope = serde_json::from_str(PAYLOAD).unwrap();
        let row = quotes::ActiveModel::from(envelope.usdbrl);

        assert!(row.id.is_not_set());
        assert_eq!(row.code.as_ref(), "USD");
        assert_eq!(row.var_bid.as_ref(), "0.0047");
        assert_eq!(row.pct_change.as_ref(), "0.09");
        assert_eq!(row.bid.as_ref(), "5.25");
        assert_eq!(row.create_date.as_ref(), "2024-06-24 11:37:43");
    }
}

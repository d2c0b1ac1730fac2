//! Parse a free-form daily sales message into structured counts and amounts.
//!
//! Messages look like `12/5 2dacbiet 3super 1vip cknv 50 dack 200`:
//! ticket counts sit in front of tier keywords, and the tokens after the
//! `cknv` / `dack` markers are amounts in thousands of VND.

use regex::Regex;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Token marking that the next token is the staff tip, in thousands.
pub const TIP_MARKER: &str = "cknv";
/// Token marking that the next token was already transferred, in thousands.
pub const TRANSFER_MARKER: &str = "dack";

/// Ticket price tiers, matched by keyword in the message text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Tier {
    #[serde(rename = "dac-biet")]
    DacBiet,
    #[serde(rename = "super")]
    Super,
    #[serde(rename = "vip")]
    Vip,
    #[serde(rename = "v500")]
    V500,
}

impl Tier {
    pub const ALL: [Tier; 4] = [Tier::DacBiet, Tier::Super, Tier::Vip, Tier::V500];

    /// Keyword that marks this tier in a sales message (lowercase).
    pub fn keyword(&self) -> &'static str {
        match self {
            Tier::DacBiet => "dacbiet",
            Tier::Super => "super",
            Tier::Vip => "vip",
            Tier::V500 => "v500",
        }
    }
}

/// Structured form of one sales message. Built fresh per message,
/// discarded once the reply is rendered.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParsedInput {
    /// Day/month token as written, e.g. "12/5". Empty when the message has none.
    pub date: String,
    pub dac_biet: u32,
    pub super_tt: u32,
    pub vip_tt: u32,
    pub super_bt: u32,
    /// Staff tip in VND (the message gives thousands).
    pub tip_nv: i64,
    /// Amount already transferred in VND (the message gives thousands).
    pub da_ck: i64,
}

impl ParsedInput {
    pub fn count(&self, tier: Tier) -> u32 {
        match tier {
            Tier::DacBiet => self.dac_biet,
            Tier::Super => self.super_tt,
            Tier::Vip => self.vip_tt,
            Tier::V500 => self.super_bt,
        }
    }

    fn set_count(&mut self, tier: Tier, n: u32) {
        match tier {
            Tier::DacBiet => self.dac_biet = n,
            Tier::Super => self.super_tt = n,
            Tier::Vip => self.vip_tt = n,
            Tier::V500 => self.super_bt = n,
        }
    }
}

/// Why a message was rejected. Rejection always covers the whole message;
/// there is no partial report.
#[derive(Debug, Error)]
pub enum ParseError {
    #[error("bad amount {token:?} after marker {marker:?}")]
    MalformedNumber { marker: &'static str, token: String },

    #[error("ticket count {digits:?} before {keyword:?} is out of range")]
    MalformedCount { keyword: &'static str, digits: String },

    #[error(transparent)]
    Pattern(#[from] regex::Error),
}

impl ParseError {
    /// Reply body sent back to the chat instead of the report.
    pub fn user_message(&self) -> String {
        match self {
            ParseError::MalformedNumber { marker, token } => format!(
                "Dạ anh Ba, em không đọc được số \"{token}\" sau \"{marker}\", anh kiểm tra lại giúp em ạ."
            ),
            ParseError::MalformedCount { keyword, digits } => format!(
                "Dạ anh Ba, số vé \"{digits}\" trước \"{keyword}\" lớn quá, anh kiểm tra lại giúp em ạ."
            ),
            ParseError::Pattern(_) => {
                "Dạ anh Ba, em chưa xử lý được tin nhắn này, anh gửi lại giúp em ạ.".to_string()
            }
        }
    }
}

/// Parse one chat message into a [`ParsedInput`].
///
/// Absent pieces default to zero or empty; only a marker followed by a
/// token that is not a number rejects the message.
pub fn parse_message(text: &str) -> Result<ParsedInput, ParseError> {
    let mut input = ParsedInput::default();
    let lowered = text.to_lowercase();

    let date_re = Regex::new(r"\d{1,2}/\d{1,2}")?;
    if let Some(m) = date_re.find(text) {
        input.date = m.as_str().to_string();
    }

    // First match per keyword wins; repeats of a keyword are not summed.
    for tier in Tier::ALL {
        let count_re = Regex::new(&format!(r"(\d+)\s*{}", tier.keyword()))?;
        if let Some(caps) = count_re.captures(&lowered) {
            let digits = &caps[1];
            let n = digits.parse().map_err(|_| ParseError::MalformedCount {
                keyword: tier.keyword(),
                digits: digits.to_string(),
            })?;
            input.set_count(tier, n);
        }
    }

    let tokens: Vec<&str> = text.split_whitespace().collect();
    for (i, token) in tokens.iter().enumerate() {
        let token = token.to_lowercase();
        if token.contains(TIP_MARKER) {
            if let Some(amount) = marker_amount(TIP_MARKER, tokens.get(i + 1).copied())? {
                input.tip_nv = amount;
            }
        }
        if token.contains(TRANSFER_MARKER) {
            if let Some(amount) = marker_amount(TRANSFER_MARKER, tokens.get(i + 1).copied())? {
                input.da_ck = amount;
            }
        }
    }

    Ok(input)
}

/// Amount in VND for the token following a marker. A dangling marker at the
/// end of the message is ignored rather than rejected.
fn marker_amount(marker: &'static str, next: Option<&str>) -> Result<Option<i64>, ParseError> {
    let Some(token) = next else {
        return Ok(None);
    };
    let malformed = || ParseError::MalformedNumber {
        marker,
        token: token.to_string(),
    };
    let thousands: i64 = token.parse().map_err(|_| malformed())?;
    let amount = thousands.checked_mul(1000).ok_or_else(malformed)?;
    Ok(Some(amount))
}

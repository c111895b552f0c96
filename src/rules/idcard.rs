// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Resident ID card number verification.
//!
//! A number passes four gates in order: presence (handled by the caller),
//! format, region code and, for 18 character numbers, the weighted
//! modulo 11 check digit.

use lazy_static::lazy_static;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::error::IdCardError;

use super::pattern::ID_CARD;

lazy_static! {
    /// Province-level region codes.
    static ref PROVINCES: HashMap<u8, &'static str> = [
        (11, "北京"),
        (12, "天津"),
        (13, "河北"),
        (14, "山西"),
        (15, "内蒙古"),
        (21, "辽宁"),
        (22, "吉林"),
        (23, "黑龙江"),
        (31, "上海"),
        (32, "江苏"),
        (33, "浙江"),
        (34, "安徽"),
        (35, "福建"),
        (36, "江西"),
        (37, "山东"),
        (41, "河南"),
        (42, "湖北"),
        (43, "湖南"),
        (44, "广东"),
        (45, "广西"),
        (46, "海南"),
        (50, "重庆"),
        (51, "四川"),
        (52, "贵州"),
        (53, "云南"),
        (54, "西藏"),
        (61, "陕西"),
        (62, "甘肃"),
        (63, "青海"),
        (64, "宁夏"),
        (65, "新疆"),
        (71, "台湾"),
        (81, "香港"),
        (82, "澳门"),
        (91, "国外"),
    ]
    .into_iter()
    .collect();
}

/// Weights applied to the first 17 digits.
const FACTORS: [u32; 17] = [7, 9, 10, 5, 8, 4, 2, 1, 6, 3, 7, 9, 10, 5, 8, 4, 2];

/// Check digit indexed by the weighted sum modulo 11.
const PARITY: [char; 11] = ['1', '0', 'X', '9', '8', '7', '6', '5', '4', '3', '2'];

/// How the final check digit is compared.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChecksumMode {
    /// Compatible with the long-standing form library behaviour: only an `X`
    /// check digit can ever match, so numbers ending in a digit are rejected.
    #[default]
    Legacy,
    /// Plain comparison of the computed check digit.
    Standard,
}

/// Province name for a two digit region code.
pub fn province_name(code: u8) -> Option<&'static str> {
    PROVINCES.get(&code).copied()
}

/// Compute the check digit for a 17 digit body.
///
/// Returns `None` if the body is not exactly 17 ASCII digits.
pub fn check_digit(body: &str) -> Option<char> {
    if body.len() != FACTORS.len() {
        return None;
    }

    let mut sum = 0;
    for (c, factor) in body.chars().zip(FACTORS) {
        sum += c.to_digit(10)? * factor;
    }

    Some(PARITY[(sum % 11) as usize])
}

/// Run the format, region and checksum gates, stopping at the first failure.
pub fn verify_id_card(value: &str, mode: ChecksumMode) -> Result<(), IdCardError> {
    if !ID_CARD.is_match(value) {
        return Err(IdCardError::Format);
    }

    let region = value.get(..2).and_then(|code| code.parse::<u8>().ok());
    if region.and_then(province_name).is_none() {
        return Err(IdCardError::Region);
    }

    // Only the 18 character form carries a check digit
    if value.len() == 18 {
        let (body, last) = value.split_at(17);
        let expected = check_digit(body).ok_or(IdCardError::Format)?;
        let actual = last.chars().next().ok_or(IdCardError::Format)?;

        let matches = match mode {
            ChecksumMode::Legacy => expected == 'X' && actual.eq_ignore_ascii_case(&'X'),
            ChecksumMode::Standard => expected.eq_ignore_ascii_case(&actual),
        };
        if !matches {
            return Err(IdCardError::Checksum);
        }
    }

    Ok(())
}

// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! User-facing message templates.
//!
//! These strings are matched verbatim by existing front ends, so they must
//! not be reworded.

use crate::error::IdCardError;

pub fn please_enter(label: &str) -> String {
    format!("请输入{}", label)
}

pub fn please_select(label: &str) -> String {
    format!("请选择{}", label)
}

pub fn cannot_be_empty(label: &str) -> String {
    format!("{}不能为空", label)
}

pub fn length_above(label: &str, max: usize) -> String {
    format!("{}长度不能大于{}", label, max)
}

pub fn length_below(label: &str, min: usize) -> String {
    format!("{}长度不能小于{}", label, min)
}

pub fn above(label: &str, max: f64) -> String {
    format!("{}不能大于{}", label, max)
}

pub fn below(label: &str, min: f64) -> String {
    format!("{}不能小于{}", label, min)
}

pub fn format_incorrect(label: &str) -> String {
    format!("{}格式不正确", label)
}

pub fn letters_or_digits(label: &str) -> String {
    format!("{}只能是字母或数字", label)
}

pub fn integer_only(label: &str) -> String {
    format!("{}只能是整数", label)
}

/// The precision clause is only present when a precision was given.
pub fn integer_or_decimal(label: &str, precision: Option<u32>) -> String {
    match precision {
        Some(p) => format!("{}只能是整数或者小数(小数后{}位)", label, p),
        None => format!("{}只能是整数或者小数", label),
    }
}

pub fn money_only(label: &str) -> String {
    format!("{}只能是数字和小数点后面两位", label)
}

pub fn id_card(label: &str, error: IdCardError) -> String {
    format!("{}{}", label, error)
}

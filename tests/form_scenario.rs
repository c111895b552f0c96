// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! End-to-end validation of a mixed form.

use formrules::{Constraints, FormConfig, FormValidator, Rules};
use serde_json::{json, Value};
use std::io::Write;

const EXPECTED: [&str; 12] = [
    "姓名1长度不能小于6",
    "姓名2长度不能大于3",
    "密码2只能是字母或数字",
    "请选择select1",
    "url2格式不正确",
    "integer_float2只能是整数或者小数(小数后3位)",
    "money3只能是数字和小数点后面两位",
    "phone2格式不正确",
    "email2格式不正确",
    "qq2格式不正确",
    "idcard1校验位错误",
    "idcard2校验位错误",
];

fn form() -> Value {
    json!({
        "name1": "muji",
        "name2": "muji",
        "age": 16,
        "pass1": "1234abcd",
        "pass2": "1232#3232a",
        "select1": "1",
        "select2": "1",
        "url1": "https://github.com/",
        "url2": "github.com",
        "integer1": "123",
        "integer2": 0,
        "integer3": -4,
        "integer_float1": "123",
        "integer_float2": 0.1222,
        "integer_float3": -4.333,
        "money1": "123",
        "money2": 0.12,
        "money3": -4.333,
        "phone1": "13333333333",
        "phone2": "1333333333",
        "email1": "1333333333@qq.com",
        "email2": "1333333333@qq",
        "qq1": "1333333",
        "qq2": "13333qq",
        "idcard1": "152201198511080048",
        "idcard2": "152201198511080041",
    })
}

fn validator_from_builders() -> FormValidator {
    let c = Constraints::default;

    FormValidator::new()
        .with_field("name1", Rules::text("姓名1", &c().with_max_length(12).with_min_length(6)))
        .with_field("name2", Rules::text("姓名2", &c().with_max_length(3).with_min_length(1)))
        .with_field("age", Rules::integer("年龄", &c().with_maximum(99.0).with_minimum(1.0)))
        .with_field(
            "pass1",
            Rules::letter_or_digit("密码1", &c().with_max_length(16).with_min_length(8)),
        )
        .with_field(
            "pass2",
            Rules::letter_or_digit("密码2", &c().with_max_length(16).with_min_length(8)),
        )
        .with_field("select1", Rules::select("select1", &c().with_multiple(true)))
        .with_field("select2", Rules::select("select2", &c()))
        .with_field("url1", Rules::url("url1", &c()))
        .with_field("url2", Rules::url("url2", &c()))
        .with_field("integer1", Rules::integer("integer1", &c()))
        .with_field("integer2", Rules::integer("integer2", &c()))
        .with_field("integer3", Rules::integer("integer3", &c()))
        .with_field("integer_float1", Rules::decimal("integer_float1", &c().with_precision(3)))
        .with_field("integer_float2", Rules::decimal("integer_float2", &c().with_precision(3)))
        .with_field("integer_float3", Rules::decimal("integer_float3", &c().with_precision(3)))
        .with_field("money1", Rules::money("money1", &c()))
        .with_field("money2", Rules::money("money2", &c()))
        .with_field("money3", Rules::money("money3", &c()))
        .with_field("phone1", Rules::phone("phone1", &c()))
        .with_field("phone2", Rules::phone("phone2", &c()))
        .with_field("email1", Rules::email("email1", &c()))
        .with_field("email2", Rules::email("email2", &c()))
        .with_field("qq1", Rules::qq("qq1", &c()))
        .with_field("qq2", Rules::qq("qq2", &c()))
        .with_field("idcard1", Rules::id_card("idcard1", &c()))
        .with_field("idcard2", Rules::id_card("idcard2", &c()))
}

const FORM_TOML: &str = r#"
[[fields]]
name = "name1"
label = "姓名1"
kind = "text"
max_length = 12
min_length = 6

[[fields]]
name = "name2"
label = "姓名2"
kind = "text"
max_length = 3
min_length = 1

[[fields]]
name = "age"
label = "年龄"
kind = "integer"
maximum = 99
minimum = 1

[[fields]]
name = "pass1"
label = "密码1"
kind = "letter_or_digit"
max_length = 16
min_length = 8

[[fields]]
name = "pass2"
label = "密码2"
kind = "letter_or_digit"
max_length = 16
min_length = 8

[[fields]]
name = "select1"
kind = "select"
multiple = true

[[fields]]
name = "select2"
kind = "select"

[[fields]]
name = "url1"
kind = "url"

[[fields]]
name = "url2"
kind = "url"

[[fields]]
name = "integer1"
kind = "integer"

[[fields]]
name = "integer2"
kind = "integer"

[[fields]]
name = "integer3"
kind = "integer"

[[fields]]
name = "integer_float1"
kind = "decimal"
precision = 3

[[fields]]
name = "integer_float2"
kind = "decimal"
precision = 3

[[fields]]
name = "integer_float3"
kind = "decimal"
precision = 3

[[fields]]
name = "money1"
kind = "money"

[[fields]]
name = "money2"
kind = "money"

[[fields]]
name = "money3"
kind = "money"

[[fields]]
name = "phone1"
kind = "phone"

[[fields]]
name = "phone2"
kind = "phone"

[[fields]]
name = "email1"
kind = "email"

[[fields]]
name = "email2"
kind = "email"

[[fields]]
name = "qq1"
kind = "qq"

[[fields]]
name = "qq2"
kind = "qq"

[[fields]]
name = "idcard1"
kind = "id_card"

[[fields]]
name = "idcard2"
kind = "id_card"
"#;

#[test]
fn test_mixed_form_messages_from_builders() {
    let result = validator_from_builders().validate(&form());
    assert_eq!(result.first_messages(), EXPECTED);
}

#[test]
fn test_mixed_form_messages_from_toml_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(FORM_TOML.as_bytes()).unwrap();

    let validator = FormConfig::load_from(file.path()).unwrap().build().unwrap();
    let result = validator.validate(&form());
    assert_eq!(result.first_messages(), EXPECTED);
}

#[test]
fn test_toml_and_builders_agree() {
    let from_toml = FormConfig::parse(FORM_TOML).unwrap().build().unwrap();
    let from_builders = validator_from_builders();

    for name in from_builders.field_names() {
        assert_eq!(from_toml.rules_for(name), from_builders.rules_for(name), "{name}");
    }
}

#[test]
fn test_valid_fields_are_not_reported() {
    let result = validator_from_builders().validate(&form());
    let invalid = result.invalid_fields();

    for name in [
        "age", "pass1", "select2", "url1", "integer1", "integer2", "integer3",
        "integer_float1", "integer_float3", "money1", "money2", "phone1", "email1", "qq1",
    ] {
        assert!(!invalid.contains(&name), "{name} should be valid");
    }
}

#[test]
fn test_descriptors_serialize_for_front_ends() {
    let rules = Rules::integer("年龄", &Constraints::default().with_maximum(99.0));
    let json = serde_json::to_value(&rules).unwrap();

    assert_eq!(json[0]["required"], true);
    assert_eq!(json[0]["trigger"], json!(["change", "blur"]));
    assert_eq!(json[0]["checker"]["check"], "integer");
    assert_eq!(json[1]["checker"]["check"], "bounds");
    assert_eq!(json[1]["checker"]["maximum"], 99.0);
}

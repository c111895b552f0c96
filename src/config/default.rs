// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Example form definition.

/// An example form definition covering every field kind.
pub fn example_config() -> &'static str {
    r#"# Form definition
# Author: Eshan Roy
# SPDX-License-Identifier: MIT

[[fields]]
name = "name"
label = "姓名"
kind = "text"
max_length = 12
min_length = 2

[[fields]]
name = "password"
label = "密码"
kind = "letter_or_digit"
max_length = 16
min_length = 8

[[fields]]
name = "gender"
label = "性别"
kind = "select"

[[fields]]
name = "hobbies"
label = "爱好"
kind = "select"
multiple = true

[[fields]]
name = "homepage"
label = "主页"
kind = "url"
required = false

[[fields]]
name = "age"
label = "年龄"
kind = "integer"
maximum = 99
minimum = 1

[[fields]]
name = "height"
label = "身高"
kind = "decimal"
precision = 2

[[fields]]
name = "salary"
label = "薪资"
kind = "money"
minimum = 0.01

[[fields]]
name = "phone"
label = "手机号码"
kind = "phone"

[[fields]]
name = "card"
label = "银行卡号"
kind = "bank_card"
required = false

[[fields]]
name = "email"
label = "邮箱"
kind = "email"

[[fields]]
name = "qq"
label = "QQ号"
kind = "qq"
required = false

[[fields]]
name = "id"
label = "身份证号码"
kind = "id_card"
checksum = "standard"
"#
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::FormConfig;
    use serde_json::json;

    #[test]
    fn test_example_config_parses() {
        let config = FormConfig::parse(example_config()).unwrap();
        assert_eq!(config.fields.len(), 13);
    }

    #[test]
    fn test_example_config_accepts_valid_form() {
        let validator = FormConfig::parse(example_config()).unwrap().build().unwrap();

        let result = validator.validate(&json!({
            "name": "木吉",
            "password": "abcd1234",
            "gender": "f",
            "hobbies": ["reading"],
            "age": 30,
            "height": "1.75",
            "salary": "8000.50",
            "phone": "13800138000",
            "email": "someone@example.com",
            "id": "152201198511080048",
        }));

        assert!(result.is_valid(), "{:?}", result.errors);
    }
}

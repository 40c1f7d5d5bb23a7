//! `application/x-www-form-urlencoded` bodies and query strings

use kennel_core::{DogPatch, DogStatus, KennelError, Result};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Form {
    pairs: Vec<(String, String)>,
}

/// Percent-decode one form component; `+` stands for a space
pub fn decode(raw: &str) -> String {
    let spaced = raw.replace('+', " ");
    match urlencoding::decode(&spaced) {
        Ok(decoded) => decoded.into_owned(),
        Err(_) => spaced,
    }
}

impl Form {
    pub fn parse(raw: &[u8]) -> Self {
        let text = String::from_utf8_lossy(raw);
        let pairs = text
            .split('&')
            .filter(|pair| !pair.is_empty())
            .map(|pair| match pair.split_once('=') {
                Some((key, value)) => (decode(key), decode(value)),
                None => (decode(pair), String::new()),
            })
            .collect();
        Form { pairs }
    }

    /// First value for `key`
    pub fn get(&self, key: &str) -> Option<&str> {
        self.pairs
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Bulk amount; anything unparsable counts as zero and is refused later
    pub fn amount(&self) -> usize {
        self.get("amount")
            .and_then(|v| v.trim().parse().ok())
            .unwrap_or(0)
    }

    pub fn status(&self) -> Result<DogStatus> {
        let raw = self
            .get("status")
            .ok_or_else(|| KennelError::InvalidInput("Missing status".into()))?;
        raw.parse().map_err(KennelError::InvalidInput)
    }

    /// Edit form fields. Absent fields are left alone; an empty age or
    /// description clears the column.
    pub fn patch(&self) -> Result<DogPatch> {
        let text = |key: &str| self.get(key).map(|v| v.trim().to_string());
        let optional = |key: &str| text(key).map(|v| Some(v).filter(|v| !v.is_empty()));

        Ok(DogPatch {
            name: text("name"),
            breed: text("breed"),
            age: optional("age"),
            image_url: text("image_url").filter(|v| !v.is_empty()),
            status: match self.get("status") {
                Some(_) => Some(self.status()?),
                None => None,
            },
            description: optional("description"),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_decodes_pairs() {
        let form = Form::parse(b"name=Max+Power&breed=Hound%20Afghan&flag");
        assert_eq!(form.get("name"), Some("Max Power"));
        assert_eq!(form.get("breed"), Some("Hound Afghan"));
        assert_eq!(form.get("flag"), Some(""));
        assert_eq!(form.get("missing"), None);
    }

    #[test]
    fn test_amount() {
        assert_eq!(Form::parse(b"amount=7").amount(), 7);
        assert_eq!(Form::parse(b"amount=%207%20").amount(), 7);
        assert_eq!(Form::parse(b"amount=lots").amount(), 0);
        assert_eq!(Form::parse(b"").amount(), 0);
    }

    #[test]
    fn test_status() {
        assert_eq!(Form::parse(b"status=adopted").status(), Ok(DogStatus::Adopted));
        assert!(matches!(
            Form::parse(b"status=lost").status(),
            Err(KennelError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_patch_from_edit_form() {
        let form = Form::parse(b"name=Rocky&breed=Pug&age=&status=pending");
        let patch = form.patch().unwrap();
        assert_eq!(patch.name.as_deref(), Some("Rocky"));
        assert_eq!(patch.breed.as_deref(), Some("Pug"));
        assert_eq!(patch.age, Some(None));
        assert_eq!(patch.status, Some(DogStatus::Pending));
        assert_eq!(patch.description, None);
        assert_eq!(patch.image_url, None);
    }

    #[test]
    fn test_patch_rejects_unknown_status() {
        assert!(Form::parse(b"name=Rocky&status=sold").patch().is_err());
    }
}

use serde::{Deserialize, Serialize};
use std::fmt;
use std::marker::PhantomData;

/// String identifier tagged with the kind of entity it names, so ids of different kinds cannot be mixed up.
#[derive(PartialEq, Eq, PartialOrd, Ord, Clone, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Id<T> {
    pub id: String,
    #[serde(skip)]
    _marker: PhantomData<T>,
}

impl<T> Id<T> {
    pub fn new(id: impl Into<String>) -> Self {
        Id { id: id.into(), _marker: PhantomData }
    }

    pub fn as_str(&self) -> &str {
        &self.id
    }
}

impl<T> fmt::Display for Id<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.id)
    }
}

impl<T> From<Id<T>> for String {
    fn from(id_wrapper: Id<T>) -> Self {
        id_wrapper.id
    }
}

impl<T> fmt::Debug for Id<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let full_name = std::any::type_name::<T>();
        let clean_name = full_name.split("::").last().unwrap_or(full_name);
        let display_name = clean_name.replace("Tag", "Id");

        write!(f, "{}: {:?}", display_name, self.id)
    }
}

#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Clone, Hash, Copy)]
pub struct SatelliteTag;

pub type SatelliteId = Id<SatelliteTag>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_debug_uses_tag_name() {
        let id = SatelliteId::new("NOAA 19");
        assert_eq!(format!("{:?}", id), "SatelliteId: \"NOAA 19\"");
        assert_eq!(id.to_string(), "NOAA 19");
    }

    #[test]
    fn test_serde_is_transparent() {
        let id: SatelliteId = serde_json::from_str("\"METEOR-M 2\"").unwrap();
        assert_eq!(id.as_str(), "METEOR-M 2");
        assert_eq!(serde_json::to_string(&id).unwrap(), "\"METEOR-M 2\"");
    }
}

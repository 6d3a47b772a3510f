use web_sys::window;

use crate::config::CONSENT_STORAGE_KEY;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ConsentChoice {
    Unset,
    Accepted,
    Declined,
}

impl ConsentChoice {
    pub fn from_stored(value: Option<&str>) -> Self {
        match value {
            Some("accepted") => ConsentChoice::Accepted,
            Some("declined") => ConsentChoice::Declined,
            _ => ConsentChoice::Unset,
        }
    }

    pub fn as_stored(self) -> Option<&'static str> {
        match self {
            ConsentChoice::Accepted => Some("accepted"),
            ConsentChoice::Declined => Some("declined"),
            ConsentChoice::Unset => None,
        }
    }
}

pub trait ConsentStore {
    fn load(&self) -> ConsentChoice;
    fn save(&self, choice: ConsentChoice);
}

/// Browser local storage under a single fixed key.
pub struct LocalStorageConsent;

impl LocalStorageConsent {
    fn storage() -> Option<web_sys::Storage> {
        window()?.local_storage().ok().flatten()
    }
}

impl ConsentStore for LocalStorageConsent {
    fn load(&self) -> ConsentChoice {
        let stored = Self::storage()
            .and_then(|storage| storage.get_item(CONSENT_STORAGE_KEY).ok())
            .flatten();
        ConsentChoice::from_stored(stored.as_deref())
    }

    fn save(&self, choice: ConsentChoice) {
        let Some(value) = choice.as_stored() else {
            return;
        };
        match Self::storage() {
            Some(storage) => {
                if storage.set_item(CONSENT_STORAGE_KEY, value).is_err() {
                    log::warn!("Could not persist cookie consent");
                }
            }
            None => log::warn!("Local storage unavailable, consent not persisted"),
        }
    }
}

/// Whether the banner should be offered for a stored choice.
pub fn needs_prompt(choice: ConsentChoice) -> bool {
    choice == ConsentChoice::Unset
}


#[cfg(test)]
mod tests {
    use super::testing::MemoryConsentStore;
    use super::*;

    #[test]
    fn unknown_or_missing_values_read_as_unset() {
        assert_eq!(ConsentChoice::from_stored(None), ConsentChoice::Unset);
        assert_eq!(ConsentChoice::from_stored(Some("maybe")), ConsentChoice::Unset);
        assert!(needs_prompt(ConsentChoice::from_stored(Some(""))));
    }

    #[test]
    fn stored_choice_round_trips_through_the_store() {
        let store = MemoryConsentStore::default();
        assert_eq!(store.load(), ConsentChoice::Unset);

        store.save(ConsentChoice::Declined);
        assert_eq!(store.value.borrow().as_deref(), Some("declined"));
        assert_eq!(store.load(), ConsentChoice::Declined);
        assert!(!needs_prompt(store.load()));

        store.save(ConsentChoice::Accepted);
        assert_eq!(store.load(), ConsentChoice::Accepted);
    }

    #[test]
    fn saving_unset_leaves_existing_choice() {
        let store = MemoryConsentStore::default();
        store.save(ConsentChoice::Accepted);
        store.save(ConsentChoice::Unset);
        assert_eq!(store.load(), ConsentChoice::Accepted);
    }
}

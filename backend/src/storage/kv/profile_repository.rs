//! # Profile Repository
//!
//! Whole-record get/replace on the `user-profile` slot. The profile is a
//! singleton: saving always overwrites the entire record, so callers that
//! want a partial update must read, merge and save.

use anyhow::Result;
use log::info;
use shared::UserProfile;

use super::connection::{KvConnection, USER_PROFILE_KEY};
use crate::storage::traits::ProfileStorage;

#[derive(Clone)]
pub struct ProfileRepository {
    connection: KvConnection,
}

impl ProfileRepository {
    pub fn new(connection: KvConnection) -> Self {
        Self { connection }
    }
}

impl ProfileStorage for ProfileRepository {
    fn get(&self) -> Result<Option<UserProfile>> {
        Ok(self.connection.read_slot(USER_PROFILE_KEY))
    }

    fn save(&self, profile: &UserProfile) -> Result<()> {
        self.connection.write_slot(USER_PROFILE_KEY, profile)?;
        info!("Saved user profile");
        Ok(())
    }
}

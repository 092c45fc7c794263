//! User and group database access.
//!
//! Resolution code talks to [`IdentityDirectory`] instead of calling into
//! libc directly, so tests can swap in [`StaticDirectory`] and never depend on
//! the accounts present on the build host.

use crate::error::{LocateError, Result};
use nix::unistd::{Group, Uid, User};
use std::collections::HashMap;
use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserRecord {
    pub uid: u32,
    pub name: String,
    pub home: PathBuf,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GroupRecord {
    pub gid: u32,
    pub name: String,
}

pub trait IdentityDirectory {
    /// Fails with `NotFound` when no such user exists and `LookupFailure` when
    /// the database cannot be read.
    fn lookup_user_by_id(&self, uid: u32) -> Result<UserRecord>;

    /// Same error contract as [`IdentityDirectory::lookup_user_by_id`].
    fn lookup_group_by_name(&self, name: &str) -> Result<GroupRecord>;
}

/// Backed by `getpwuid_r`/`getgrnam_r` (NSS aware).
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemDirectory;

impl IdentityDirectory for SystemDirectory {
    fn lookup_user_by_id(&self, uid: u32) -> Result<UserRecord> {
        let user = User::from_uid(Uid::from_raw(uid))
            .map_err(|e| LocateError::LookupFailure(format!("user {}: {}", uid, e)))?
            .ok_or_else(|| LocateError::NotFound(format!("user {}", uid)))?;
        Ok(UserRecord {
            uid: user.uid.as_raw(),
            name: user.name,
            home: user.dir,
        })
    }

    fn lookup_group_by_name(&self, name: &str) -> Result<GroupRecord> {
        let group = Group::from_name(name)
            .map_err(|e| LocateError::LookupFailure(format!("group {}: {}", name, e)))?
            .ok_or_else(|| LocateError::NotFound(format!("group {}", name)))?;
        Ok(GroupRecord {
            gid: group.gid.as_raw(),
            name: group.name,
        })
    }
}

/// Fixed in-memory user and group tables.
#[derive(Debug, Clone, Default)]
pub struct StaticDirectory {
    users: HashMap<u32, UserRecord>,
    groups: HashMap<String, GroupRecord>,
    unavailable: bool,
}

impl StaticDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_user(mut self, uid: u32, name: &str, home: impl Into<PathBuf>) -> Self {
        self.users.insert(
            uid,
            UserRecord {
                uid,
                name: name.to_string(),
                home: home.into(),
            },
        );
        self
    }

    pub fn with_group(mut self, gid: u32, name: &str) -> Self {
        self.groups.insert(
            name.to_string(),
            GroupRecord {
                gid,
                name: name.to_string(),
            },
        );
        self
    }

    /// Make every lookup fail with `LookupFailure`, as if NSS were down.
    pub fn unavailable(mut self) -> Self {
        self.unavailable = true;
        self
    }
}

impl IdentityDirectory for StaticDirectory {
    fn lookup_user_by_id(&self, uid: u32) -> Result<UserRecord> {
        if self.unavailable {
            return Err(LocateError::LookupFailure(format!(
                "user {}: directory unavailable",
                uid
            )));
        }
        self.users
            .get(&uid)
            .cloned()
            .ok_or_else(|| LocateError::NotFound(format!("user {}", uid)))
    }

    fn lookup_group_by_name(&self, name: &str) -> Result<GroupRecord> {
        if self.unavailable {
            return Err(LocateError::LookupFailure(format!(
                "group {}: directory unavailable",
                name
            )));
        }
        self.groups
            .get(name)
            .cloned()
            .ok_or_else(|| LocateError::NotFound(format!("group {}", name)))
    }
}

use std::ops::{Deref, DerefMut};

use sdk::{
    cosmwasm_std::{Addr, Storage},
    cw_storage_plus::Item,
};

use crate::{
    error::{Error, Result},
    SingleUserAccess,
};

const MANAGEMENT_NAMESPACE: &str = "management";
const PENDING_MANAGEMENT_NAMESPACE: &str = "pending_management";

/// The permission to administer a contract
pub struct ManagementAccess<'storage, S>
where
    S: Deref<Target = dyn Storage + 'storage>,
{
    access: SingleUserAccess<'storage, S>,
}

impl<'storage, S> ManagementAccess<'storage, S>
where
    S: Deref<Target = dyn Storage + 'storage>,
{
    pub const fn new(storage: S) -> Self {
        Self {
            access: SingleUserAccess::new(storage, MANAGEMENT_NAMESPACE),
        }
    }

    pub fn check(&self, user: &Addr) -> Result {
        self.access.check(user)
    }

    pub fn management(&self) -> Result<Addr> {
        self.access.granted_to()
    }
}

impl<'storage, S> ManagementAccess<'storage, S>
where
    S: Deref<Target = dyn Storage + 'storage> + DerefMut,
{
    pub fn grant_to(&mut self, user: &Addr) -> Result {
        self.access.grant_to(user)
    }
}

/// Two-phase hand-over of the [`ManagementAccess`] permission
///
/// The current management proposes a candidate which takes over only after it
/// accepts. A new proposal replaces the previous one.
pub struct ManagementTransfer<'storage, S>
where
    S: Deref<Target = dyn Storage + 'storage>,
{
    storage: S,
    management: Item<'storage, Addr>,
    pending: Item<'storage, Addr>,
}

impl<'storage, S> ManagementTransfer<'storage, S>
where
    S: Deref<Target = dyn Storage + 'storage>,
{
    pub const fn new(storage: S) -> Self {
        Self {
            storage,
            management: Item::new(MANAGEMENT_NAMESPACE),
            pending: Item::new(PENDING_MANAGEMENT_NAMESPACE),
        }
    }

    pub fn pending(&self) -> Result<Option<Addr>> {
        self.pending
            .may_load(self.storage.deref())
            .map_err(Into::into)
    }
}

impl<'storage, S> ManagementTransfer<'storage, S>
where
    S: Deref<Target = dyn Storage + 'storage> + DerefMut,
{
    pub fn propose(&mut self, candidate: &Addr) -> Result {
        self.pending
            .save(self.storage.deref_mut(), candidate)
            .map_err(Into::into)
    }

    /// Complete the transfer on behalf of `caller`
    ///
    /// Returns the new management which is always `caller`.
    pub fn accept(&mut self, caller: &Addr) -> Result<Addr> {
        self.pending()
            .and_then(|pending| pending.ok_or(Error::Unauthorized {}))
            .and_then(|pending| crate::check(&pending, caller).map(|()| pending))
            .and_then(|pending| {
                self.management
                    .save(self.storage.deref_mut(), &pending)
                    .map(|()| {
                        self.pending.remove(self.storage.deref_mut());
                        pending
                    })
                    .map_err(Into::into)
            })
    }
}

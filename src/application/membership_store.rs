//! MembershipStore - owns the roster and keeps it in step with storage.
//!
//! The store is constructed explicitly by the presentation layer and
//! driven one operation at a time. Every mutation is staged on a copy of
//! the roster, saved through the `MemberStorage` port, and only committed
//! in memory once the save succeeded. A failed save therefore leaves the
//! in-memory roster equal to the last durable state.

use std::sync::Arc;

use crate::domain::foundation::MemberId;
use crate::domain::member::{ClubCatalog, MemberRecord, NewMember, Roster};
use crate::ports::{MemberStorage, StorageError};

use super::errors::{MemberError, PersistenceError};

/// Result of opening a store.
///
/// Opening never fails outright: if stored data cannot be loaded the store
/// starts empty and the cause is returned in `load_error` so the caller can
/// tell the user that earlier data may be missing.
#[derive(Debug)]
pub struct OpenedStore {
    pub store: MembershipStore,
    pub load_error: Option<PersistenceError>,
}

/// Authoritative member record store.
pub struct MembershipStore {
    roster: Roster,
    catalog: ClubCatalog,
    storage: Arc<dyn MemberStorage>,
}

impl std::fmt::Debug for MembershipStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MembershipStore")
            .field("roster", &self.roster)
            .field("catalog", &self.catalog)
            .finish_non_exhaustive()
    }
}

impl MembershipStore {
    /// Loads the roster from `storage`.
    pub fn open(storage: Arc<dyn MemberStorage>, catalog: ClubCatalog) -> OpenedStore {
        let (roster, load_error) = match Self::load_roster(storage.as_ref(), &catalog) {
            Ok(roster) => (roster, None),
            Err(e) => {
                tracing::warn!(error = %e, "Failed to load roster, starting with an empty one");
                (Roster::new(), Some(PersistenceError::LoadFailed(e)))
            }
        };

        tracing::info!(
            members = roster.len(),
            next_id = %roster.next_id(),
            "Membership store opened"
        );

        OpenedStore {
            store: Self {
                roster,
                catalog,
                storage,
            },
            load_error,
        }
    }

    fn load_roster(
        storage: &dyn MemberStorage,
        catalog: &ClubCatalog,
    ) -> Result<Roster, StorageError> {
        let snapshot = storage.load()?;
        let stored_next_id = snapshot.next_id;
        let roster = Roster::restore(snapshot)?;

        if roster.next_id() != stored_next_id {
            tracing::warn!(
                stored = %stored_next_id,
                repaired = %roster.next_id(),
                "Stored next_id did not exceed every member ID"
            );
        }

        for member in roster.members() {
            if !catalog.contains(&member.club_type) {
                tracing::warn!(
                    member_id = %member.id,
                    club_type = %member.club_type,
                    "Loaded member belongs to a club type that is no longer offered"
                );
            }
        }

        Ok(roster)
    }

    /// Registers a new member.
    ///
    /// Inputs are trimmed before validation. On success the member gets the
    /// next membership ID and the roster is saved.
    ///
    /// # Errors
    ///
    /// - `Validation` if name, club type or activity is rejected (no state change)
    /// - `IdsExhausted` if no membership ID is left to issue (no state change)
    /// - `Persistence(SaveFailed)` if the roster could not be saved (no state change)
    pub fn register(
        &mut self,
        name: &str,
        club_type: &str,
        activity: &str,
    ) -> Result<MemberRecord, MemberError> {
        let member = NewMember::parse(name, club_type, activity, &self.catalog)?;

        let mut staged = self.roster.clone();
        let record = staged.register(member)?;
        self.commit(staged)?;

        tracing::info!(
            member_id = %record.id,
            club_type = %record.club_type,
            "Member registered"
        );

        Ok(record)
    }

    /// All members in registration order.
    pub fn list_all(&self) -> &[MemberRecord] {
        self.roster.members()
    }

    /// Members whose name contains `query`, ignoring case.
    ///
    /// A blank query returns every member.
    pub fn search(&self, query: &str) -> Vec<MemberRecord> {
        let matches = self.roster.search(query);
        tracing::debug!(query = query.trim(), matches = matches.len(), "Searched members");
        matches
    }

    /// Deletes the member with `id` and returns the removed record.
    ///
    /// The ID is never issued again.
    ///
    /// # Errors
    ///
    /// - `NotFound` if no member has this ID (no state change)
    /// - `Persistence(SaveFailed)` if the roster could not be saved (no state change)
    pub fn delete(&mut self, id: MemberId) -> Result<MemberRecord, MemberError> {
        let mut staged = self.roster.clone();
        let removed = staged.remove(id).ok_or(MemberError::NotFound(id))?;
        self.commit(staged)?;

        tracing::info!(member_id = %removed.id, "Member deleted");

        Ok(removed)
    }

    pub fn get(&self, id: MemberId) -> Option<&MemberRecord> {
        self.roster.get(id)
    }

    /// The ID the next registration will receive.
    pub fn next_id(&self) -> MemberId {
        self.roster.next_id()
    }

    /// Club types offered at registration.
    pub fn catalog(&self) -> &ClubCatalog {
        &self.catalog
    }

    fn commit(&mut self, staged: Roster) -> Result<(), PersistenceError> {
        self.storage.save(&staged.snapshot()).map_err(|e| {
            tracing::error!(error = %e, "Failed to save roster, change discarded");
            PersistenceError::SaveFailed(e)
        })?;
        self.roster = staged;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::storage::InMemoryMemberStorage;
    use crate::domain::foundation::{ErrorCode, ValidationError};
    use crate::domain::member::{IntegrityError, RosterSnapshot};
    use proptest::prelude::*;

    // ════════════════════════════════════════════════════════════════════════════
    // Helpers
    // ════════════════════════════════════════════════════════════════════════════

    fn open_store(storage: &InMemoryMemberStorage) -> MembershipStore {
        let opened = MembershipStore::open(Arc::new(storage.clone()), ClubCatalog::default());
        assert!(opened.load_error.is_none());
        opened.store
    }

    fn names(records: &[MemberRecord]) -> Vec<&str> {
        records.iter().map(|m| m.name.as_str()).collect()
    }

    // ════════════════════════════════════════════════════════════════════════════
    // Register
    // ════════════════════════════════════════════════════════════════════════════

    #[test]
    fn register_assigns_ids_and_saves() {
        let storage = InMemoryMemberStorage::new();
        let mut store = open_store(&storage);

        let jane = store.register("Jane Doe", "Book Club", "Mystery novels").unwrap();
        let john = store.register("John Roe", "Sport Club", "Tennis").unwrap();

        assert_eq!(jane.id, MemberId::new(1));
        assert_eq!(john.id, MemberId::new(2));
        assert_eq!(store.next_id(), MemberId::new(3));
        assert_eq!(storage.save_count(), 2);

        let stored = storage.stored().unwrap();
        assert_eq!(stored.members, store.list_all());
        assert_eq!(stored.next_id, MemberId::new(3));
    }

    #[test]
    fn register_trims_inputs() {
        let storage = InMemoryMemberStorage::new();
        let mut store = open_store(&storage);

        let record = store.register("  Jane Doe ", " book club ", " Chess  ").unwrap();

        assert_eq!(record.name, "Jane Doe");
        assert_eq!(record.club_type.as_str(), "Book Club");
        assert_eq!(record.activity, "Chess");
    }

    #[test]
    fn register_rejects_invalid_input_without_side_effects() {
        let storage = InMemoryMemberStorage::new();
        let mut store = open_store(&storage);

        let cases = [
            (("", "Sport Club", "x"), ValidationError::EmptyName),
            (("A", "", "x"), ValidationError::NoClubType),
            (("A", "Chess Club", "x"), ValidationError::NoClubType),
            (("A", "Sport Club", ""), ValidationError::EmptyActivity),
        ];

        for ((name, club, activity), expected) in cases {
            let err = store.register(name, club, activity).unwrap_err();
            assert!(
                matches!(&err, MemberError::Validation(v) if *v == expected),
                "unexpected error {:?}",
                err
            );
        }

        assert!(store.list_all().is_empty());
        assert_eq!(store.next_id(), MemberId::FIRST);
        assert_eq!(storage.save_count(), 0);
    }

    #[test]
    fn register_accepts_club_type_without_spaces() {
        let storage = InMemoryMemberStorage::new();
        let mut store = open_store(&storage);

        let err = store.register("A", "SportClub", "").unwrap_err();
        assert!(matches!(
            err,
            MemberError::Validation(ValidationError::EmptyActivity)
        ));

        let jane = store.register("Jane Doe", "BookClub", "Mystery novels").unwrap();
        assert_eq!(jane.id, MemberId::FIRST);
        assert_eq!(jane.club_type.as_str(), "Book Club");
    }

    #[test]
    fn register_fails_cleanly_when_ids_are_exhausted() {
        let storage = InMemoryMemberStorage::with_snapshot(RosterSnapshot {
            members: Vec::new(),
            next_id: MemberId::new(u64::MAX),
        });
        let mut store = open_store(&storage);

        let err = store.register("Jane Doe", "Book Club", "Mystery novels").unwrap_err();

        assert!(matches!(err, MemberError::IdsExhausted(_)));
        assert_eq!(err.code(), ErrorCode::IdsExhausted);
        assert!(store.list_all().is_empty());
        assert_eq!(store.next_id(), MemberId::new(u64::MAX));
        assert_eq!(storage.save_count(), 0);
    }

    #[test]
    fn register_save_failure_leaves_state_unchanged() {
        let storage = InMemoryMemberStorage::new();
        let mut store = open_store(&storage);
        store.register("Jane Doe", "Book Club", "Mystery novels").unwrap();

        storage.set_fail_save(true);
        let err = store.register("John Roe", "Sport Club", "Tennis").unwrap_err();

        assert_eq!(err.code(), ErrorCode::SaveFailed);
        assert_eq!(names(store.list_all()), vec!["Jane Doe"]);
        assert_eq!(store.next_id(), MemberId::new(2));

        storage.set_fail_save(false);
        let john = store.register("John Roe", "Sport Club", "Tennis").unwrap();
        assert_eq!(john.id, MemberId::new(2));
    }

    // ════════════════════════════════════════════════════════════════════════════
    // Search / list
    // ════════════════════════════════════════════════════════════════════════════

    #[test]
    fn search_is_case_insensitive_substring_in_order() {
        let storage = InMemoryMemberStorage::new();
        let mut store = open_store(&storage);
        for name in ["Alice", "bob", "ALBERT"] {
            store.register(name, "Sport Club", "Running").unwrap();
        }

        assert_eq!(names(&store.search("al")), vec!["Alice", "ALBERT"]);
        assert_eq!(names(&store.search("")), vec!["Alice", "bob", "ALBERT"]);
        assert_eq!(names(&store.search("   ")), names(store.list_all()));
        assert_eq!(names(&store.search("BOB")), vec!["bob"]);
    }

    // ════════════════════════════════════════════════════════════════════════════
    // Delete
    // ════════════════════════════════════════════════════════════════════════════

    #[test]
    fn delete_removes_member_and_never_reuses_id() {
        let storage = InMemoryMemberStorage::new();
        let mut store = open_store(&storage);
        store.register("Jane Doe", "Book Club", "Mystery novels").unwrap();
        store.register("John Roe", "Sport Club", "Tennis").unwrap();

        let removed = store.delete(MemberId::new(2)).unwrap();
        assert_eq!(removed.name, "John Roe");
        assert!(store.get(MemberId::new(2)).is_none());

        let next = store.register("Ann Poe", "Book Club", "Poetry").unwrap();
        assert_eq!(next.id, MemberId::new(3));
    }

    #[test]
    fn delete_unknown_id_fails_without_side_effects() {
        let storage = InMemoryMemberStorage::new();
        let mut store = open_store(&storage);
        store.register("Jane Doe", "Book Club", "Mystery novels").unwrap();
        let before = store.list_all().to_vec();

        let err = store.delete(MemberId::new(999)).unwrap_err();

        assert!(matches!(err, MemberError::NotFound(id) if id == MemberId::new(999)));
        assert_eq!(store.list_all(), before.as_slice());
        assert_eq!(storage.save_count(), 1);
    }

    #[test]
    fn delete_save_failure_keeps_member() {
        let storage = InMemoryMemberStorage::new();
        let mut store = open_store(&storage);
        store.register("Jane Doe", "Book Club", "Mystery novels").unwrap();

        storage.set_fail_save(true);
        let err = store.delete(MemberId::FIRST).unwrap_err();

        assert!(matches!(
            err,
            MemberError::Persistence(PersistenceError::SaveFailed(_))
        ));
        assert!(store.get(MemberId::FIRST).is_some());
    }

    // ════════════════════════════════════════════════════════════════════════════
    // Open
    // ════════════════════════════════════════════════════════════════════════════

    #[test]
    fn open_restores_previous_state() {
        let storage = InMemoryMemberStorage::new();
        {
            let mut store = open_store(&storage);
            store.register("Jane Doe", "Book Club", "Mystery novels").unwrap();
            store.register("John Roe", "Sport Club", "Tennis").unwrap();
            store.delete(MemberId::FIRST).unwrap();
        }

        let store = open_store(&storage);

        assert_eq!(names(store.list_all()), vec!["John Roe"]);
        assert_eq!(store.next_id(), MemberId::new(3));
    }

    #[test]
    fn open_falls_back_to_empty_on_load_failure() {
        let storage = InMemoryMemberStorage::new();
        storage.set_fail_load(true);

        let opened = MembershipStore::open(Arc::new(storage), ClubCatalog::default());

        assert!(opened.store.list_all().is_empty());
        assert_eq!(opened.store.next_id(), MemberId::FIRST);
        assert!(matches!(
            opened.load_error,
            Some(PersistenceError::LoadFailed(_))
        ));
    }

    #[test]
    fn open_treats_inconsistent_snapshot_as_load_failure() {
        let mut store = open_store(&InMemoryMemberStorage::new());
        let record = store.register("Jane Doe", "Book Club", "Mystery novels").unwrap();
        let snapshot = RosterSnapshot {
            members: vec![record.clone(), record],
            next_id: MemberId::new(2),
        };

        let opened = MembershipStore::open(
            Arc::new(InMemoryMemberStorage::with_snapshot(snapshot)),
            ClubCatalog::default(),
        );

        assert!(opened.store.list_all().is_empty());
        assert!(matches!(
            opened.load_error,
            Some(PersistenceError::LoadFailed(StorageError::Integrity(_)))
        ));
    }

    #[test]
    fn open_treats_id_at_counter_limit_as_load_failure() {
        let mut store = open_store(&InMemoryMemberStorage::new());
        let mut record = store.register("Jane Doe", "Book Club", "Mystery novels").unwrap();
        record.id = MemberId::new(u64::MAX);
        let snapshot = RosterSnapshot {
            members: vec![record],
            next_id: MemberId::FIRST,
        };

        let opened = MembershipStore::open(
            Arc::new(InMemoryMemberStorage::with_snapshot(snapshot)),
            ClubCatalog::default(),
        );

        assert!(opened.store.list_all().is_empty());
        assert_eq!(opened.store.next_id(), MemberId::FIRST);
        assert!(matches!(
            opened.load_error,
            Some(PersistenceError::LoadFailed(StorageError::Integrity(
                IntegrityError::IdOverflow(_)
            )))
        ));
    }

    #[test]
    fn open_keeps_members_of_unoffered_club_types() {
        let storage = InMemoryMemberStorage::new();
        {
            let opened = MembershipStore::open(
                Arc::new(storage.clone()),
                ClubCatalog::new(["Chess Club"]),
            );
            let mut store = opened.store;
            store.register("Magnus", "Chess Club", "Blitz").unwrap();
        }

        let store = open_store(&storage);

        assert_eq!(store.list_all().len(), 1);
        assert_eq!(store.list_all()[0].club_type.as_str(), "Chess Club");
        assert!(!store.catalog().contains(&store.list_all()[0].club_type));
    }

    // ════════════════════════════════════════════════════════════════════════════
    // Properties
    // ════════════════════════════════════════════════════════════════════════════

    #[derive(Debug, Clone)]
    enum Op {
        Register(String),
        Delete(u64),
    }

    fn op_strategy() -> impl Strategy<Value = Op> {
        prop_oneof![
            "[a-zA-Z]{1,8}".prop_map(Op::Register),
            (1u64..12).prop_map(Op::Delete),
        ]
    }

    proptest! {
        #[test]
        fn issued_ids_strictly_increase_and_are_never_reused(
            ops in proptest::collection::vec(op_strategy(), 0..40)
        ) {
            let storage = InMemoryMemberStorage::new();
            let mut store = open_store(&storage);
            let mut issued: Vec<MemberId> = Vec::new();

            for op in ops {
                match op {
                    Op::Register(name) => {
                        let record = store.register(&name, "Sport Club", "Running").unwrap();
                        if let Some(last) = issued.last() {
                            prop_assert!(record.id > *last);
                        }
                        issued.push(record.id);
                    }
                    Op::Delete(raw) => {
                        let id = MemberId::new(raw);
                        let existed = store.get(id).is_some();
                        prop_assert_eq!(store.delete(id).is_ok(), existed);
                    }
                }

                prop_assert!(issued.iter().all(|id| *id < store.next_id()));
                let ids: Vec<MemberId> = store.list_all().iter().map(|m| m.id).collect();
                prop_assert!(ids.windows(2).all(|w| w[0] < w[1]));
            }

            prop_assert_eq!(store.next_id().value(), issued.len() as u64 + 1);
        }
    }
}

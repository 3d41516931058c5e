//! Lock alias used across the workspace.
//!
//! Everything runs on the host's tick thread, so this lock is never
//! contended. It exists so shared state satisfies `Send + Sync`.

/// A mutex that does not poison.
pub type SyncMutex<T> = parking_lot::Mutex<T>;

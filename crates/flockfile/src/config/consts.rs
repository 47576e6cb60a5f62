//! Constants shared by the open path

/// Permission bits for a newly created file (owner rwx)
pub const DEFAULT_MODE: u32 = 0o700;

/// Largest accepted mode: permission bits plus setuid/setgid/sticky
pub const MAX_MODE: u32 = 0o7777;

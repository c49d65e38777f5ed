//! Workspace-level integration tests for linrec live in `tests/`.

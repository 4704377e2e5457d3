/// Errors raised while assembling an in-memory entity graph.
#[derive(Debug, thiserror::Error)]
pub enum GraphError {
    #[error("duplicate entity uid: {uid}")]
    DuplicateUid { uid: String },

    #[error("duplicate page title: {title}")]
    DuplicateTitle { title: String },

    #[error("block {uid} has unknown parent {parent_uid}")]
    UnknownParent { uid: String, parent_uid: String },

    #[error("entity {from_uid} references unknown target {target}")]
    UnknownReference { from_uid: String, target: String },

    #[error("parent chain of {uid} does not reach a page")]
    ParentCycle { uid: String },

    #[error("failed to parse graph snapshot: {message}")]
    SnapshotParse { message: String },
}

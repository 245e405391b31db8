use slotmap::{Key, new_key_type};

new_key_type! {
    pub struct VertexId;
    pub struct EdgeId;
}

impl VertexId {
    /// Slot index of this vertex, for human-readable diagnostics only.
    pub fn index(self) -> u32 {
        (self.data().as_ffi() & 0xffff_ffff) as u32
    }
}


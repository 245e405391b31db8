use crate::core::models::ids::VertexId;

/// Structured diagnostic events emitted while a run progresses.
///
/// Events are observational only: they never feed back into the algorithm,
/// and a run with no observer behaves identically.
#[derive(Debug, Clone)]
pub enum Diagnostic {
    RunStart { vertices: usize, edges: usize },
    ComponentStart { vertices: usize },

    VertexEliminated {
        vertex: VertexId,
        joins: usize,
        live_paths: usize,
    },
    RingClosed { size: usize },

    RunFinish { rings: usize },
}

pub type DiagnosticCallback<'a> = Box<dyn Fn(Diagnostic) + Send + Sync + 'a>;

#[derive(Default)]
pub struct DiagnosticReporter<'a> {
    callback: Option<DiagnosticCallback<'a>>,
}

impl<'a> DiagnosticReporter<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_callback(callback: DiagnosticCallback<'a>) -> Self {
        Self {
            callback: Some(callback),
        }
    }

    #[inline]
    pub fn report(&self, event: Diagnostic) {
        if let Some(cb) = &self.callback {
            cb(event);
        }
    }
}

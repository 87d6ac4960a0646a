use crate::config::{self, DecompositionConfig};
use crate::decomposition::{ConvexDecomposer, ConvexPart, DecompositionParams, VhacdDecomposer};
use crate::logging::{Console, LogBridge, LogEvent, LogLevel, LogSettings, LogSink};
use crate::math::{Point, Real};
use crate::mesh::{self, IndexedMesh};
use crate::reconstruct::{self, ConvexShape};
use crate::{DecomposerError, DecompositionError};
use core::any::Any;
use parry3d::shape::TriMesh;
use std::panic::{self, AssertUnwindSafe};
use std::sync::mpsc::Receiver;

/// Decomposes concave triangle meshes into convex shapes.
///
/// This owns the decomposition backend and the logging state used while it
/// runs: the log threshold, the console echo flag and the event subscribers.
/// Each call to [`convex_decomposition`](Self::convex_decomposition)
///
/// 1. validates the configuration,
/// 2. welds the duplicate vertices of the input triangle soup,
/// 3. makes the winding of the mesh outward-facing,
/// 4. runs the backend while forwarding its logs on a separate thread,
/// 5. converts each part into a [`ConvexShape`].
///
/// Calls block until the backend returns, which may take a long time for
/// complex meshes.
pub struct ConvexDecomposition<D = VhacdDecomposer> {
    decomposer: D,
    log_settings: LogSettings,
    bridge: LogBridge,
}

impl Default for ConvexDecomposition<VhacdDecomposer> {
    fn default() -> Self {
        Self::new(VhacdDecomposer::default())
    }
}

impl<D: ConvexDecomposer> ConvexDecomposition<D> {
    /// Uses `decomposer` as backend, echoing its logs through the `log` crate.
    pub fn new(decomposer: D) -> Self {
        Self {
            decomposer,
            log_settings: LogSettings::default(),
            bridge: LogBridge::default(),
        }
    }

    /// Uses `decomposer` as backend, echoing its logs to `console`.
    pub fn with_console(decomposer: D, console: impl Console + 'static) -> Self {
        Self {
            decomposer,
            log_settings: LogSettings::default(),
            bridge: LogBridge::new(console),
        }
    }

    /// The decomposition backend.
    pub fn decomposer(&self) -> &D {
        &self.decomposer
    }

    /// The current logging settings.
    pub fn log_settings(&self) -> &LogSettings {
        &self.log_settings
    }

    /// The minimum severity of the backend logs that are forwarded.
    pub fn log_level(&self) -> LogLevel {
        self.log_settings.level
    }

    /// Sets the minimum severity of the backend logs that are forwarded.
    pub fn set_log_level(&mut self, level: LogLevel) {
        self.log_settings.level = level;
    }

    /// Are the backend logs echoed to the console?
    pub fn print_to_console(&self) -> bool {
        self.log_settings.print_to_console
    }

    /// Enables or disables the console echo of the backend logs.
    pub fn set_print_to_console(&mut self, print_to_console: bool) {
        self.log_settings.print_to_console = print_to_console;
    }

    /// Subscribes to the backend logs.
    ///
    /// All the logs emitted during a decomposition are sent to the returned
    /// receiver before that decomposition returns.
    pub fn subscribe(&self) -> Receiver<LogEvent> {
        self.bridge.subscribe()
    }

    /// Decomposes a triangle soup into convex shapes.
    ///
    /// Every three consecutive points of `soup` form a triangle. An empty
    /// soup gives no shape.
    pub fn convex_decomposition(
        &self,
        soup: &[Point<Real>],
        config: &DecompositionConfig,
    ) -> Result<Vec<ConvexShape>, DecompositionError> {
        let parts = self.decompose_parts(soup, config)?;
        Ok(reconstruct::reconstruct(parts))
    }

    /// Decomposes a parry triangle mesh into convex shapes.
    pub fn convex_decomposition_of_trimesh(
        &self,
        trimesh: &TriMesh,
        config: &DecompositionConfig,
    ) -> Result<Vec<ConvexShape>, DecompositionError> {
        let soup = IndexedMesh::from_trimesh(trimesh).flatten();
        self.convex_decomposition(&soup, config)
    }

    /// Decomposes a triangle soup, returning the raw parts computed by the backend.
    pub fn decompose_parts(
        &self,
        soup: &[Point<Real>],
        config: &DecompositionConfig,
    ) -> Result<Vec<ConvexPart>, DecompositionError> {
        let config = config::validate(config)?;
        let mut mesh = mesh::weld_vertices(soup)?;

        if mesh.is_empty() {
            log::debug!("Empty input mesh, nothing to decompose.");
            return Ok(Vec::new());
        }

        let _ = mesh::correct_orientation(&mut mesh);
        let params = DecompositionParams::from_config(config);
        let parts = self.run_backend(&mesh, &params)?;

        log::debug!(
            "Decomposed {} triangles into {} convex parts.",
            mesh.num_triangles(),
            parts.len()
        );

        Ok(parts)
    }

    fn run_backend(
        &self,
        mesh: &IndexedMesh,
        params: &DecompositionParams,
    ) -> Result<Vec<ConvexPart>, DecomposerError> {
        let settings = self.log_settings;
        let (sink, records) = LogBridge::channel(&settings);
        log::debug!(
            "Running the decomposition backend with log level \"{}\".",
            settings.level.name()
        );
        let bridge = &self.bridge;

        std::thread::scope(|s| {
            let _ = s.spawn(move || bridge.drain(records, &settings));
            let result = invoke(&self.decomposer, mesh, params, &sink);
            // Disconnects the channel so the consumer thread can finish.
            drop(sink);
            result
        })
    }
}

fn invoke<D: ConvexDecomposer>(
    decomposer: &D,
    mesh: &IndexedMesh,
    params: &DecompositionParams,
    log: &LogSink,
) -> Result<Vec<ConvexPart>, DecomposerError> {
    panic::catch_unwind(AssertUnwindSafe(|| decomposer.decompose(mesh, params, log)))
        .unwrap_or_else(|payload| Err(DecomposerError::Panicked(panic_message(&*payload))))
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(msg) = payload.downcast_ref::<&str>() {
        msg.to_string()
    } else if let Some(msg) = payload.downcast_ref::<String>() {
        msg.clone()
    } else {
        "unknown panic payload".to_string()
    }
}

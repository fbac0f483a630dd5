// crates/geofill-core/src/host.rs
use crate::config::{HostInputs, HostOutputs};
use crate::error::Result;

/// The four calls an embedding shell makes on a standard control.
///
/// Adapters implement this on top of [`crate::AddressAutocomplete`] and keep
/// all geocode, debounce and list logic in the core.
pub trait HostControl {
    /// What the host hands over to render into.
    type Mount;

    /// Builds the widget inside `mount`. `notify` is called after every
    /// committed selection; no network call happens here.
    fn init(
        &mut self,
        inputs: &HostInputs,
        notify: Box<dyn FnMut()>,
        mount: Self::Mount,
    ) -> Result<()>;

    /// Host refresh; only the bound address is taken from `inputs`, the
    /// country filter stays as captured by `init`.
    fn update_view(&mut self, inputs: &HostInputs);

    fn get_outputs(&self) -> HostOutputs;

    /// Releases listeners and timers. Must not fail.
    fn destroy(&mut self);
}

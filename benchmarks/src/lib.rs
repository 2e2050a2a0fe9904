//! Shared helpers for dustpan benchmark suites.

use dustpan_harness::worlds::regimes::Regime;
use dustpan_kernel::world::parse::ParsedWorld;
use dustpan_search::search::{search, SearchResult};

/// A regime with its world parsed once, outside the timed region.
pub struct SearchSetup {
    pub regime: Regime,
    pub world: ParsedWorld,
}

/// Parse a regime's world so benchmarks time only `search()`.
///
/// # Panics
///
/// Panics if the regime's world text does not parse. Benchmark setup
/// failures are fatal.
#[must_use]
pub fn prepare_search_setup(regime: Regime) -> SearchSetup {
    let world = regime.world().expect("regime world parses");
    SearchSetup { regime, world }
}

/// Run the search for a prepared regime.
#[must_use]
pub fn run_search_only(setup: &SearchSetup) -> SearchResult {
    search(
        setup.world.start.clone(),
        &setup.world.grid,
        &setup.regime.policy,
    )
}

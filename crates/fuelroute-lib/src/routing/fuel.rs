//! Retroactive fuel purchase bookkeeping.
//!
//! A route never decides where to buy fuel while standing at a station.
//! Instead every station it passes stays open as a purchase option, and each
//! leg's consumption is billed afterwards to the cheapest upstream option
//! that still has headroom. The headroom recorded at a station equals the
//! tank's free space at the moment of the visit, so a committed purchase is
//! always one the truck could physically have carried.

use rust_decimal::Decimal;

use crate::roadmap::GasStation;
use crate::sorted::insort_by_key;

use super::route::RoutePoint;

/// An unspent purchase option at a previously visited gas-station point.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FuelPossibility {
    pub route_point: RoutePoint,
    /// Station price, captured when the point was visited.
    pub price: Decimal,
    /// Volume still purchasable from this station.
    pub possible_vol: Decimal,
    /// Volume already committed to this station.
    pub used_vol: Decimal,
}

/// A frozen purchase at a visited gas-station point.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Refuel {
    pub route_point: RoutePoint,
    pub volume: Decimal,
}

/// Per-route snapshot of open purchase options, frozen refuels, residual
/// starting fuel, and accumulated cost.
///
/// `rfp_queue` is ordered by station price ascending. `cost` only ever grows
/// as a route advances, which is what makes pruning against the best
/// completed route sound.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FuelPool {
    /// Unspent remainder of the fuel the route started with.
    pub existing_fuel_vol: Decimal,
    pub rfp_queue: Vec<FuelPossibility>,
    pub refuel_list: Vec<Refuel>,
    pub cost: Decimal,
}

/// A leg that cannot be fueled from the tank plus upstream headroom.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct ImpossibleMove;

/// The fuel algebra, configured once per search with the tank capacity.
///
/// Every operation is a pure function from one [`FuelPool`] snapshot to the
/// next; routes that share a prefix keep independent snapshots.
#[derive(Debug, Clone, Copy)]
pub(crate) struct FuelPlanner {
    capacity: Decimal,
}

impl FuelPlanner {
    pub fn new(capacity: Decimal) -> Self {
        Self { capacity }
    }

    /// Pool for a route standing at its start point.
    ///
    /// A station at the start contributes a possibility even though the
    /// initial volume was free: it can still top up the remaining headroom.
    pub fn start(
        &self,
        start_rp: RoutePoint,
        station: Option<GasStation>,
        start_fuel_vol: Decimal,
    ) -> FuelPool {
        debug_assert!(start_fuel_vol >= Decimal::ZERO && start_fuel_vol <= self.capacity);
        let mut rfp_queue = Vec::new();
        if let Some(station) = station {
            rfp_queue.push(FuelPossibility {
                route_point: start_rp,
                price: station.price,
                possible_vol: self.capacity - start_fuel_vol,
                used_vol: Decimal::ZERO,
            });
        }
        FuelPool {
            existing_fuel_vol: start_fuel_vol,
            rfp_queue,
            refuel_list: Vec::new(),
            cost: Decimal::ZERO,
        }
    }

    /// Advance a pool over a leg consuming `used_volume`, arriving at
    /// `new_rp`.
    ///
    /// Free starting fuel drains first. The remaining need is allocated over
    /// the open possibilities in stored (price-ascending) order. Volume taken
    /// earlier in this step shrinks the headroom of every later possibility:
    /// the tank can only carry `capacity`, so options feeding the same
    /// forward segment share it. Options drained to zero freeze into the
    /// refuel log; a station at the arrival point opens a fresh possibility
    /// sized by the tank's free space.
    pub fn advance(
        &self,
        prev: &FuelPool,
        used_volume: Decimal,
        new_rp: RoutePoint,
        station: Option<GasStation>,
    ) -> Result<FuelPool, ImpossibleMove> {
        let mut cost = prev.cost;
        let existing_fuel_vol = (prev.existing_fuel_vol - used_volume).max(Decimal::ZERO);
        let mut volume_to_refuel = (used_volume - prev.existing_fuel_vol).max(Decimal::ZERO);

        let mut rfp_queue = Vec::with_capacity(prev.rfp_queue.len() + 1);
        let mut refuel_list = prev.refuel_list.clone();
        let mut already_refueled = Decimal::ZERO;

        for rfp in &prev.rfp_queue {
            let mut possible_vol = (rfp.possible_vol - already_refueled).max(Decimal::ZERO);
            let refueled_vol = possible_vol.min(volume_to_refuel);
            possible_vol -= refueled_vol;
            volume_to_refuel -= refueled_vol;
            already_refueled += refueled_vol;
            let used_vol = rfp.used_vol + refueled_vol;
            cost += rfp.price * refueled_vol;
            if possible_vol > Decimal::ZERO {
                rfp_queue.push(FuelPossibility {
                    route_point: rfp.route_point,
                    price: rfp.price,
                    possible_vol,
                    used_vol,
                });
            } else {
                // A drained option retires with this leg's volume; finalize
                // recomputes live options from their committed totals.
                refuel_list.push(Refuel {
                    route_point: rfp.route_point,
                    volume: used_volume,
                });
            }
        }

        if volume_to_refuel > Decimal::ZERO {
            return Err(ImpossibleMove);
        }

        if let Some(station) = station {
            insort_by_key(
                &mut rfp_queue,
                FuelPossibility {
                    route_point: new_rp,
                    price: station.price,
                    possible_vol: self.capacity - existing_fuel_vol,
                    used_vol: Decimal::ZERO,
                },
                |rfp| rfp.price,
            );
        }

        Ok(FuelPool {
            existing_fuel_vol,
            rfp_queue,
            refuel_list,
            cost,
        })
    }

    /// Flatten the open possibilities into frozen refuels for presentation.
    ///
    /// The resulting `refuel_list` is sorted by route position ascending and
    /// the queue is emptied; residual fuel and cost are preserved.
    pub fn finalize(pool: &FuelPool) -> FuelPool {
        let mut refuels: Vec<Refuel> = pool
            .rfp_queue
            .iter()
            .map(|rfp| Refuel {
                route_point: rfp.route_point,
                volume: rfp.used_vol,
            })
            .collect();
        refuels.extend(pool.refuel_list.iter().copied());
        refuels.sort_by_key(|refuel| refuel.route_point.number);
        FuelPool {
            existing_fuel_vol: pool.existing_fuel_vol,
            rfp_queue: Vec::new(),
            refuel_list: refuels,
            cost: pool.cost,
        }
    }
}

//! `Coordinator` — one campaign's lifecycle, targeting, and distribution.
//!
//! A coordinator moves through `Configured → Active → Finished`.  Per tick it
//! is called twice: `update` does the bookkeeping that must be globally
//! consistent before anyone distributes (shipment countdowns, queue expiry,
//! window advancement), `update_nodes` does the actual selection and payload
//! application.  The driver guarantees every coordinator's `update` runs
//! before any coordinator's `update_nodes`.

use camp_core::{
    CampError, CampResult, CandidateRef, CoordinatorId, SimClock, UnitId,
};
use camp_quota::{QuotaWindow, WindowList};
use camp_supply::{AdmissionQueue, Inventory};
use camp_target::{
    AgeRange, AgeRangeList, DemographicRestrictions, Qualification, TargetingPredicate,
};
use camp_units::{EventTrigger, Subscription, UnitContext, UnitRegistry};

use crate::{
    ApplyTarget, CampaignConfig, CampaignObserver, FamilyConfig, Payload, QueueConfig,
};

// ── State ─────────────────────────────────────────────────────────────────────

#[derive(Copy, Clone, PartialEq, Eq, Debug)]
enum State {
    Configured,
    Active,
    Finished,
}

// ── Families ──────────────────────────────────────────────────────────────────

struct QuotaFamily {
    windows: WindowList,
}

struct QueueFamily {
    predicate:               TargetingPredicate,
    queue:                   AdmissionQueue,
    inventory:               Inventory,
    max_distributed_per_day: u32,
    days_remaining:          f32,
    triggers:                Vec<EventTrigger>,
    stop_triggers:           Vec<EventTrigger>,
    /// Set by a stop trigger; acted on at the next `update_nodes` so the
    /// teardown has registry access.
    stop_requested: bool,
}

enum Family {
    Quota(QuotaFamily),
    Queue(QueueFamily),
}

// ── Coordinator ───────────────────────────────────────────────────────────────

pub struct Coordinator {
    id:            CoordinatorId,
    name:          String,
    payload:       Box<dyn Payload>,
    family:        Family,
    state:         State,
    units:         Vec<UnitId>,
    subscriptions: Vec<Subscription>,
}

impl Coordinator {
    /// Validate `config` into a ready coordinator.  Fail-fast: the first
    /// offending parameter is reported and nothing is constructed.
    pub fn configure(id: CoordinatorId, config: CampaignConfig) -> CampResult<Self> {
        let CampaignConfig { name, payload, family } = config;

        let family = match family {
            FamilyConfig::Quota(quota) => {
                if payload.is_node_level() {
                    return Err(CampError::Config(format!(
                        "campaign '{name}': quota campaigns distribute to individuals, \
                         but payload '{}' is node-level",
                        payload.name()
                    )));
                }
                let mut windows = Vec::with_capacity(quota.windows.len());
                for wc in quota.windows {
                    let mut ranges = AgeRangeList::new();
                    for &(min, max) in &wc.age_ranges {
                        ranges.push(AgeRange::new(min, max)?);
                    }
                    windows.push(QuotaWindow::new(
                        wc.start,
                        wc.end,
                        wc.time_unit,
                        ranges,
                        wc.quotas,
                        wc.node_properties,
                        wc.candidate_properties,
                        Qualification::from_tokens(&wc.qualifying_states)?,
                    )?);
                }
                Family::Quota(QuotaFamily { windows: WindowList::new(windows)? })
            }
            FamilyConfig::Queue(queue) => {
                Family::Queue(Self::configure_queue(&name, payload.as_ref(), queue)?)
            }
        };

        Ok(Self {
            id,
            name,
            payload,
            family,
            state: State::Configured,
            units: Vec::new(),
            subscriptions: Vec::new(),
        })
    }

    fn configure_queue(
        name:    &str,
        payload: &dyn Payload,
        qc:      QueueConfig,
    ) -> CampResult<QueueFamily> {
        if qc.duration_days <= 0.0 {
            return Err(CampError::Config(format!(
                "campaign '{name}': duration_days must be positive, got {}",
                qc.duration_days
            )));
        }
        if qc.max_distributed_per_day == 0 {
            return Err(CampError::Config(format!(
                "campaign '{name}': max_distributed_per_day must be positive"
            )));
        }
        if qc.waiting_period_days < 0.0 {
            return Err(CampError::Config(format!(
                "campaign '{name}': waiting_period_days must be non-negative, got {}",
                qc.waiting_period_days
            )));
        }
        if qc.days_between_shipments <= 0.0 {
            return Err(CampError::Config(format!(
                "campaign '{name}': days_between_shipments must be positive, got {}",
                qc.days_between_shipments
            )));
        }
        qc.initial_amount.validate("initial_amount")?;

        let demographic = DemographicRestrictions::new(
            qc.coverage,
            qc.target_gender,
            qc.min_age_years,
            qc.max_age_years,
            qc.residents_only,
        )?;
        if payload.is_node_level() && !demographic.is_default() {
            // Node recipients have no age, gender, or coverage to restrict
            // on; silently ignoring the restrictions would mask a config bug.
            return Err(CampError::RestrictionsOnNodePayload {
                payload: payload.name().to_string(),
            });
        }

        let qualification = Qualification::from_tokens(&qc.qualifying_states)?;

        let mut triggers = Vec::new();
        for token in &qc.trigger_events {
            let trigger: EventTrigger = token.parse()?;
            if trigger.is_removal() {
                return Err(CampError::Config(format!(
                    "campaign '{name}': '{token}' is a removal event and cannot enqueue"
                )));
            }
            if !triggers.contains(&trigger) {
                triggers.push(trigger);
            }
        }
        if triggers.is_empty() {
            return Err(CampError::EmptyList { param: "trigger_events" });
        }

        let mut stop_triggers = Vec::new();
        for token in &qc.stop_triggers {
            let trigger: EventTrigger = token.parse()?;
            if trigger.is_removal() || triggers.contains(&trigger) {
                return Err(CampError::Config(format!(
                    "campaign '{name}': stop trigger '{token}' collides with an \
                     enqueue or removal event"
                )));
            }
            if !stop_triggers.contains(&trigger) {
                stop_triggers.push(trigger);
            }
        }

        Ok(QueueFamily {
            predicate: TargetingPredicate {
                node_properties: qc.node_properties,
                candidate_properties: qc.candidate_properties,
                demographic,
                qualification,
            },
            queue: AdmissionQueue::new(qc.waiting_period_days),
            inventory: Inventory::new(
                qc.initial_amount,
                qc.max_stock,
                qc.amount_in_shipment,
                qc.days_between_shipments,
            ),
            max_distributed_per_day: qc.max_distributed_per_day,
            days_remaining: qc.duration_days,
            triggers,
            stop_triggers,
            stop_requested: false,
        })
    }

    pub fn id(&self) -> CoordinatorId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    // ── Lifecycle ─────────────────────────────────────────────────────────

    /// Attach a spatial unit.  The first attachment activates the campaign;
    /// for the queue family it also registers the event subscriptions on the
    /// unit's broadcaster and samples the opening stock from the unit's RNG.
    pub fn add_node(&mut self, unit: &mut UnitContext) {
        if self.units.contains(&unit.id) {
            return;
        }
        self.units.push(unit.id);
        if self.state == State::Configured {
            self.state = State::Active;
        }

        if let Family::Queue(fam) = &mut self.family {
            let subscribed: Vec<EventTrigger> = fam
                .triggers
                .iter()
                .chain(fam.stop_triggers.iter())
                .copied()
                .chain(EventTrigger::REMOVAL_TRIGGERS)
                .collect();
            for trigger in subscribed {
                self.subscriptions
                    .push(unit.broadcaster.register(unit.id, trigger, self.id));
            }
            if !fam.inventory.is_initialized() {
                fam.inventory.initialize(&mut unit.rng, fam.max_distributed_per_day);
            }
        }
    }

    /// `true` once the campaign has reached its terminal condition.  Pure:
    /// repeated calls without an intervening tick agree.
    pub fn is_finished(&self) -> bool {
        self.state == State::Finished
    }

    fn finish(&mut self, registry: &mut UnitRegistry, observer: &mut dyn CampaignObserver) {
        if self.state == State::Finished {
            return;
        }
        self.state = State::Finished;
        for sub in self.subscriptions.drain(..) {
            registry.get_mut(sub.unit).broadcaster.unregister(sub, self.id);
        }
        observer.on_finished(&self.name);
    }

    // ── Phase one: update ─────────────────────────────────────────────────

    /// Pre-distribution bookkeeping: shipment countdown and queue expiry for
    /// the queue family, window cursor and bin advancement for the quota
    /// family.
    pub fn update(&mut self, clock: &SimClock, dt: f32) {
        if self.state != State::Active {
            return;
        }
        match &mut self.family {
            Family::Queue(fam) => {
                fam.inventory.update(dt);
                fam.queue.expire(clock.time, dt);
            }
            Family::Quota(fam) => {
                fam.windows.update_targeting(clock.time, dt);
            }
        }
    }

    // ── Phase two: update_nodes ───────────────────────────────────────────

    /// Selection and distribution for this tick, then the terminal-condition
    /// check.  The Finished transition releases every subscription, exactly
    /// once.
    pub fn update_nodes(
        &mut self,
        clock:    &SimClock,
        dt:       f32,
        registry: &mut UnitRegistry,
        observer: &mut dyn CampaignObserver,
    ) {
        if self.state != State::Active {
            return;
        }
        let done = if matches!(self.family, Family::Queue(_)) {
            self.distribute_queue(clock, dt, registry, observer)
        } else {
            self.distribute_quota(clock, registry, observer)
        };
        if done {
            self.finish(registry, observer);
        }
    }

    /// Queue family: pop eligible entries oldest-first, one distribution
    /// attempt each, until the per-tick allowance or the stock runs out.
    /// Only accepted payloads debit stock.  Returns whether the campaign is
    /// over (duration lapsed or stop requested).
    fn distribute_queue(
        &mut self,
        clock:    &SimClock,
        dt:       f32,
        registry: &mut UnitRegistry,
        observer: &mut dyn CampaignObserver,
    ) -> bool {
        let Self { payload, family, name, .. } = self;
        let Family::Queue(fam) = family else { unreachable!() };

        if fam.stop_requested {
            return true;
        }

        let now = clock.time;
        let allowance = (fam.max_distributed_per_day as f32 * dt) as u32;
        let budget = allowance.min(fam.inventory.current_stock());

        let mut distributed = 0u32;
        while distributed < budget {
            let Some(entry) = fam.queue.pop_eligible(now) else { break };

            let accepted = if entry.candidate.is_unit() {
                let unit = registry.get_mut(entry.candidate.unit);
                fam.predicate.evaluate_unit(&unit.properties)
                    && payload.duplicate().apply(ApplyTarget::Unit(&mut unit.properties))
            } else {
                let UnitContext { population, properties, rng, .. } =
                    registry.get_mut(entry.candidate.unit);
                match population.get_mut(entry.candidate.candidate) {
                    Some(attrs) => {
                        fam.predicate.evaluate(properties, attrs, rng)
                            && payload.duplicate().apply(ApplyTarget::Candidate(attrs))
                    }
                    // Candidate left the population after enqueueing.
                    None => false,
                }
            };
            if accepted {
                distributed += 1;
            }
        }

        fam.inventory.debit(distributed);
        if distributed > 0 {
            observer.on_distributed(name, distributed as usize);
        }

        fam.days_remaining -= dt;
        fam.days_remaining <= 0.0
    }

    /// Quota family: collect qualifying candidates per bin across every
    /// attached unit, Floyd-select each bin's quota, apply the payload.
    /// Returns whether every window has run its course.
    fn distribute_quota(
        &mut self,
        clock:    &SimClock,
        registry: &mut UnitRegistry,
        observer: &mut dyn CampaignObserver,
    ) -> bool {
        let Self { payload, family, name, units, .. } = self;
        let Family::Quota(fam) = family else { unreachable!() };
        let now = clock.time;

        if let Some(window) = fam.windows.current_mut() {
            {
                let mut attached: Vec<&mut UnitContext> = registry
                    .iter_mut()
                    .filter(|unit| units.contains(&unit.id))
                    .collect();
                window.refresh_qualifying(&mut attached);
            }

            // Sampling draws come from the first attached unit's stream.
            let sampler = units[0];
            let selected = window.select_targets(&mut registry.get_mut(sampler).rng);

            let mut distributed = 0usize;
            for target in selected {
                let unit = registry.get_mut(target.unit);
                if let Some(attrs) = unit.population.get_mut(target.candidate) {
                    if payload.duplicate().apply(ApplyTarget::Candidate(attrs)) {
                        distributed += 1;
                    }
                }
            }
            if distributed > 0 {
                observer.on_distributed(name, distributed);
            }
        }

        fam.windows.is_finished(now)
    }

    // ── Events ────────────────────────────────────────────────────────────

    /// React to a population event routed from a subscribed unit.  Removal
    /// triggers purge the candidate from the queue; stop triggers request
    /// termination; enqueue triggers admit the candidate (or their unit, for
    /// node-level payloads).
    pub fn notify_event(&mut self, trigger: EventTrigger, candidate: CandidateRef, now: f32) {
        if self.state != State::Active {
            return;
        }
        let Family::Queue(fam) = &mut self.family else {
            return;
        };

        if trigger.is_removal() {
            fam.queue.remove_candidate(candidate);
        } else if fam.stop_triggers.contains(&trigger) {
            fam.stop_requested = true;
        } else if fam.triggers.contains(&trigger) {
            let recipient = if self.payload.is_node_level() {
                CandidateRef::unit(candidate.unit)
            } else {
                candidate
            };
            fam.queue.enqueue(now, recipient);
        }
    }

    // ── Inspection ────────────────────────────────────────────────────────

    /// Remaining stock.  `None` for quota campaigns, which have no inventory.
    pub fn current_stock(&self) -> Option<u32> {
        match &self.family {
            Family::Queue(fam) => Some(fam.inventory.current_stock()),
            Family::Quota(_)   => None,
        }
    }

    pub fn days_to_next_shipment(&self) -> Option<f32> {
        match &self.family {
            Family::Queue(fam) => Some(fam.inventory.days_to_next_shipment()),
            Family::Quota(_)   => None,
        }
    }

    pub fn queue_len(&self) -> usize {
        match &self.family {
            Family::Queue(fam) => fam.queue.len(),
            Family::Quota(_)   => 0,
        }
    }

    pub fn days_remaining(&self) -> Option<f32> {
        match &self.family {
            Family::Queue(fam) => Some(fam.days_remaining),
            Family::Quota(_)   => None,
        }
    }
}

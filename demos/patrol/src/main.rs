//! patrol — smallest end-to-end example for the npc_ai framework.
//!
//! Six agents share one behavior tree: pick a random target, plan a route to
//! it through the advanced-tier pathfinder, then walk the waypoints one
//! decision at a time.  The host loop below stands in for a game engine
//! ticking at 10 Hz.

use std::sync::Arc;

use anyhow::Result;

use npc_behavior::{Action, Agent, BehaviorTree, Condition, PlanRoute, Selector, Sequence, Status};
use npc_core::{AgentId, PathTier, Point3, SchedConfig};
use npc_sched::Scheduler;

// ── Constants ─────────────────────────────────────────────────────────────────

const AGENT_COUNT: u32 = 6;
const SEED:        u64 = 42;
const TICK_DT:     f32 = 0.1; // 10 Hz host tick
const TICKS:       u64 = 200;

// ── Tree construction ─────────────────────────────────────────────────────────

/// Patrol logic, one selector with three branches tried in order:
///
/// 1. follow an already-planned route (consume the next waypoint),
/// 2. plan a route if a target is set,
/// 3. otherwise pick a fresh random target.
fn patrol_tree() -> Arc<BehaviorTree> {
    let follow = Sequence::new(vec![
        Box::new(Condition::new(|a, _| !a.blackboard.waypoints.is_empty())),
        Box::new(Action::new(|a, _| {
            let wp = a.blackboard.waypoints.remove(0);
            a.blackboard.position = wp;
            if a.blackboard.waypoints.is_empty() {
                // Route finished; clear the target so a new one gets picked.
                a.blackboard.target = None;
            }
            Status::Success
        })),
    ]);

    let plan = Sequence::new(vec![
        Box::new(Condition::new(|a, _| a.blackboard.target.is_some())),
        Box::new(PlanRoute),
    ]);

    let pick_target = Action::new(|a, _| {
        let target = Point3::new(
            a.rng.gen_range(-50.0..50.0),
            0.0,
            a.rng.gen_range(-50.0..50.0),
        );
        a.blackboard.target = Some(target);
        Status::Success
    });

    let root = Selector::new(vec![
        Box::new(follow),
        Box::new(plan),
        Box::new(pick_target),
    ]);

    Arc::new(BehaviorTree::new("patrol", Box::new(root)))
}

// ── Host loop ─────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    let config = SchedConfig {
        tier:          PathTier::Advanced,
        fair_rotation: true,
        ..Default::default()
    };
    let mut sched = Scheduler::with_config(config)?;

    let tree = patrol_tree();
    sched.register_tree(tree.clone());
    for i in 0..AGENT_COUNT {
        let mut agent = Agent::with_seed(AgentId(i), SEED).with_name(format!("npc-{i}"));
        agent.bind_tree(tree.clone());
        sched.register_agent(agent);
    }

    println!(
        "patrol: {AGENT_COUNT} agents, {} pathfinding, cadence {}s",
        sched.config().tier,
        sched.config().decision_rate_secs,
    );

    let mut total_decisions = 0;
    for tick in 0..TICKS {
        total_decisions += sched.update(TICK_DT)?;
        if tick % 50 == 49 {
            println!("tick {:>3}: {total_decisions} decisions so far", tick + 1);
        }
    }

    for agent in sched.agents() {
        println!(
            "{}: at {}, {} waypoints left",
            agent.name().unwrap_or("?"),
            agent.blackboard.position,
            agent.blackboard.waypoints.len(),
        );
    }

    Ok(())
}

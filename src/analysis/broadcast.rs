//! Minimum set of users who must post a message for everyone to see it
//!
//! A user has seen the message once they or any friend posted it. Seeds are
//! picked greedily by how many unseen users a post would reach. After each
//! post, friends of posters re-share for free when at least `share_ratio`
//! of their own friends have posted and they still have friends who have
//! not seen it.

use std::cmp::Reverse;
use std::collections::{BinaryHeap, VecDeque};

use crate::graph::{Graph, VertexId};

/// Greedy broadcast seed set, in posting order
pub fn broadcast_seeds(graph: &Graph, share_ratio: f64) -> Vec<VertexId> {
    let mut state = Broadcast::new(graph, share_ratio);

    // Weights only ever shrink, so stale heap entries are re-scored lazily
    let mut heap: BinaryHeap<(usize, Reverse<VertexId>, u32)> = (0..graph.vertex_count() as u32)
        .map(|v| (state.coverage(v), Reverse(graph.id_at(v)), v))
        .collect();

    let mut seeds = Vec::new();
    while state.unseen > 0 {
        let Some((weight, id, v)) = heap.pop() else {
            break;
        };
        if state.posted[v as usize] {
            continue;
        }

        let coverage = state.coverage(v);
        if coverage != weight {
            heap.push((coverage, id, v));
            continue;
        }

        seeds.push(id.0);
        state.post(v);
    }

    log::info!(
        "{} of {} users must post for everyone to see the message",
        seeds.len(),
        graph.vertex_count()
    );

    seeds
}

struct Broadcast<'g> {
    graph: &'g Graph,
    share_ratio: f64,
    seen: Vec<bool>,
    posted: Vec<bool>,
    unseen: usize,
}

impl<'g> Broadcast<'g> {
    fn new(graph: &'g Graph, share_ratio: f64) -> Self {
        let n = graph.vertex_count();
        Self {
            graph,
            share_ratio,
            seen: vec![false; n],
            posted: vec![false; n],
            unseen: n,
        }
    }

    /// Unseen users a post from `v` would reach, `v` included
    fn coverage(&self, v: u32) -> usize {
        let own = usize::from(!self.seen[v as usize]);
        own + self
            .graph
            .neighbor_indices(v)
            .iter()
            .filter(|&&n| !self.seen[n as usize])
            .count()
    }

    fn mark_seen(&mut self, v: u32) {
        if !self.seen[v as usize] {
            self.seen[v as usize] = true;
            self.unseen -= 1;
        }
    }

    fn wants_to_share(&self, v: u32) -> bool {
        let friends = self.graph.neighbor_indices(v);
        let has_unseen = friends.iter().any(|&n| !self.seen[n as usize]);
        let posted = friends.iter().filter(|&&n| self.posted[n as usize]).count();
        has_unseen && posted as f64 >= self.share_ratio * friends.len() as f64
    }

    /// Post from `seed`, then let the message cascade through re-shares
    fn post(&mut self, seed: u32) {
        let mut queue = VecDeque::from([seed]);

        while let Some(u) = queue.pop_front() {
            if self.posted[u as usize] || (u != seed && !self.wants_to_share(u)) {
                continue;
            }

            self.posted[u as usize] = true;
            self.mark_seen(u);

            let graph = self.graph;
            for &friend in graph.neighbor_indices(u) {
                self.mark_seen(friend);
            }
            for &friend in graph.neighbor_indices(u) {
                if !self.posted[friend as usize] && self.wants_to_share(friend) {
                    queue.push_back(friend);
                }
            }
        }
    }
}

//! Property tests over small randomly generated graphs (§8 universal
//! invariants: soundness, size-boundedness, importance, completeness by
//! brute force, trivial cases, monotonicity in k).

use std::collections::{HashSet, VecDeque};

use important_separators::{important_separators, Graph};
use quickcheck::{quickcheck, Arbitrary, Gen};

/// A small undirected graph on vertices `0..vertex_count`, generated by
/// sampling a handful of candidate edges. The generator keeps instances
/// small enough to brute-force directly, rather than depending on any
/// heavier graph-building machinery.
#[derive(Clone, Debug)]
struct SmallGraph {
    vertex_count: u8,
    edges: Vec<(u8, u8)>,
}

const MAX_VERTICES: u8 = 7;

impl Arbitrary for SmallGraph {
    fn arbitrary(g: &mut Gen) -> Self {
        let vertex_count = (u8::arbitrary(g) % MAX_VERTICES) + 1;
        let max_edges = (vertex_count as usize) * (vertex_count as usize);
        let edge_attempts = usize::arbitrary(g) % (max_edges + 1);

        let mut edges = Vec::new();
        for _ in 0..edge_attempts {
            let a = u8::arbitrary(g) % vertex_count;
            let b = u8::arbitrary(g) % vertex_count;
            if a != b {
                edges.push((a.min(b), a.max(b)));
            }
        }
        SmallGraph {
            vertex_count,
            edges,
        }
    }

    fn shrink(&self) -> Box<dyn Iterator<Item = Self>> {
        let vertex_count = self.vertex_count;
        let edges = self.edges.clone();
        Box::new(
            edges
                .shrink()
                .map(move |smaller| SmallGraph {
                    vertex_count,
                    edges: smaller,
                })
                .filter(|g| g.vertex_count >= 1),
        )
    }
}

impl SmallGraph {
    fn build(&self) -> Graph<u8> {
        let mut g = Graph::new();
        for v in 0..self.vertex_count {
            g.add_vertex(v);
        }
        for &(a, b) in &self.edges {
            g.add_edge(a, b);
        }
        g
    }
}

fn reachable_from(g: &Graph<u8>, s: u8, removed: &HashSet<u8>) -> HashSet<u8> {
    let mut seen = HashSet::new();
    if removed.contains(&s) {
        return seen;
    }
    let mut queue = VecDeque::new();
    seen.insert(s);
    queue.push_back(s);
    while let Some(u) = queue.pop_front() {
        for &w in g.neighbors(&u) {
            if removed.contains(&w) || seen.contains(&w) {
                continue;
            }
            seen.insert(w);
            queue.push_back(w);
        }
    }
    seen
}

fn brute_force(g: &Graph<u8>, s: u8, t: u8, k: usize) -> HashSet<Vec<u8>> {
    let mut candidates: Vec<u8> = g.vertices().copied().filter(|&v| v != s && v != t).collect();
    candidates.sort_unstable();

    let mut separators: Vec<HashSet<u8>> = Vec::new();
    for mask in 0u32..(1u32 << candidates.len()) {
        if mask.count_ones() as usize > k {
            continue;
        }
        let subset: HashSet<u8> = candidates
            .iter()
            .enumerate()
            .filter(|(i, _)| mask & (1 << i) != 0)
            .map(|(_, &v)| v)
            .collect();
        if !reachable_from(g, s, &subset).contains(&t) {
            separators.push(subset);
        }
    }

    let mut important = HashSet::new();
    for s1 in &separators {
        let r1 = reachable_from(g, s, s1);
        let dominated = separators.iter().any(|s2| {
            s2 != s1 && s2.len() <= s1.len() && {
                let r2 = reachable_from(g, s, s2);
                r2.is_superset(&r1) && r2 != r1
            }
        });
        if !dominated {
            let mut sorted: Vec<u8> = s1.iter().copied().collect();
            sorted.sort_unstable();
            important.insert(sorted);
        }
    }
    important
}

fn canonical(family: Vec<HashSet<u8>>) -> HashSet<Vec<u8>> {
    family
        .into_iter()
        .map(|s| {
            let mut v: Vec<u8> = s.into_iter().collect();
            v.sort_unstable();
            v
        })
        .collect()
}

fn terminals(sg: &SmallGraph) -> Option<(u8, u8)> {
    if sg.vertex_count < 2 {
        return None;
    }
    Some((0, 1))
}

quickcheck! {
    fn soundness_and_size_bound(sg: SmallGraph, budget: u8) -> bool {
        let Some((s, t)) = terminals(&sg) else { return true };
        let k = (budget % 4) as usize;
        let g = sg.build();

        let Ok(family) = important_separators(&g, s, t, k) else { return true };
        family.iter().all(|sep| {
            sep.len() <= k
                && !sep.contains(&s)
                && !sep.contains(&t)
                && !reachable_from(&g, s, sep).contains(&t)
        })
    }
}

quickcheck! {
    fn no_dominance_among_outputs(sg: SmallGraph, budget: u8) -> bool {
        let Some((s, t)) = terminals(&sg) else { return true };
        let k = (budget % 4) as usize;
        let g = sg.build();

        let Ok(family) = important_separators(&g, s, t, k) else { return true };
        family.iter().all(|s1| {
            let r1 = reachable_from(&g, s, s1);
            !family.iter().any(|s2| {
                s2 != s1 && s2.len() <= s1.len() && {
                    let r2 = reachable_from(&g, s, s2);
                    r2.is_superset(&r1) && r2 != r1
                }
            })
        })
    }
}

quickcheck! {
    fn agrees_with_brute_force(sg: SmallGraph, budget: u8) -> bool {
        let Some((s, t)) = terminals(&sg) else { return true };
        let k = (budget % 4) as usize;
        let g = sg.build();

        let Ok(family) = important_separators(&g, s, t, k) else { return true };
        canonical(family) == brute_force(&g, s, t, k)
    }
}

quickcheck! {
    fn monotonic_in_k(sg: SmallGraph, budget: u8) -> bool {
        let Some((s, t)) = terminals(&sg) else { return true };
        let k = (budget % 4) as usize;
        let g = sg.build();

        let Ok(smaller) = important_separators(&g, s, t, k) else { return true };
        let Ok(bigger) = important_separators(&g, s, t, k + 1) else { return true };
        let smaller = canonical(smaller);
        let bigger = canonical(bigger);
        smaller.is_subset(&bigger)
    }
}

quickcheck! {
    fn identical_terminals_always_trivial(sg: SmallGraph, budget: u8) -> bool {
        if sg.vertex_count < 1 {
            return true;
        }
        let v = 0u8;
        let k = (budget % 5) as usize;
        let g = sg.build();

        important_separators(&g, v, v, k) == Ok(vec![HashSet::new()])
    }
}

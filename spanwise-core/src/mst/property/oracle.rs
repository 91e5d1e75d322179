//! Reverse-delete oracle for spanning tree weights.
//!
//! Shares no code with the strategies under test: edges are visited from the
//! heaviest down and dropped whenever the rest of the graph stays connected.

/// Minimum spanning tree weight, or `None` when the rows describe a
/// disconnected graph.
pub(super) fn reverse_delete(rows: &[Vec<i64>]) -> Option<i64> {
    let vertex_count = usize::try_from(rows.first()?.first().copied()?).ok()?;
    let mut edges: Vec<(i64, usize, usize)> = rows
        .iter()
        .skip(1)
        .filter_map(|row| {
            let from = usize::try_from(row[0]).ok()?;
            let to = usize::try_from(row[1]).ok()?;
            (from != to).then_some((row[2], from, to))
        })
        .collect();
    edges.sort_unstable_by(|left, right| right.cmp(left));

    let mut kept = vec![true; edges.len()];
    if !connected(vertex_count, &edges, &kept) {
        return None;
    }
    for index in 0..edges.len() {
        kept[index] = false;
        if !connected(vertex_count, &edges, &kept) {
            kept[index] = true;
        }
    }

    Some(
        edges
            .iter()
            .zip(&kept)
            .filter(|(_, keep)| **keep)
            .map(|(edge, _)| edge.0)
            .sum(),
    )
}

fn connected(vertex_count: usize, edges: &[(i64, usize, usize)], kept: &[bool]) -> bool {
    if vertex_count <= 1 {
        return true;
    }
    let mut adjacency = vec![Vec::new(); vertex_count + 1];
    for (&(_, from, to), _) in edges.iter().zip(kept).filter(|(_, keep)| **keep) {
        adjacency[from].push(to);
        adjacency[to].push(from);
    }

    let mut seen = vec![false; vertex_count + 1];
    let mut stack = vec![1];
    seen[1] = true;
    let mut reached = 1;
    while let Some(vertex) = stack.pop() {
        for &next in &adjacency[vertex] {
            if !seen[next] {
                seen[next] = true;
                reached += 1;
                stack.push(next);
            }
        }
    }
    reached == vertex_count
}

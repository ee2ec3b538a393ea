//! Static reference card for each sorting and graph algorithm

use crate::algorithms::{GraphAlgorithm, SortAlgorithm};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Complexity {
    pub best: &'static str,
    pub average: &'static str,
    pub worst: &'static str,
    pub space: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AlgorithmInfo {
    pub name: &'static str,
    pub complexity: Complexity,
    pub description: &'static str,
}

const fn info(
    name: &'static str,
    [best, average, worst, space]: [&'static str; 4],
    description: &'static str,
) -> AlgorithmInfo {
    AlgorithmInfo {
        name,
        complexity: Complexity {
            best,
            average,
            worst,
            space,
        },
        description,
    }
}

pub fn sort_info(algorithm: SortAlgorithm) -> AlgorithmInfo {
    match algorithm {
        SortAlgorithm::Bubble => info(
            algorithm.name(),
            ["O(n)", "O(n²)", "O(n²)", "O(1)"],
            "Repeatedly steps through the list, compares adjacent elements and swaps them \
             if they are in the wrong order. Stops early after a pass with no swaps.",
        ),
        SortAlgorithm::Selection => info(
            algorithm.name(),
            ["O(n²)", "O(n²)", "O(n²)", "O(1)"],
            "Splits the array into a sorted and an unsorted region and repeatedly moves the \
             smallest unsorted element to the end of the sorted region.",
        ),
        SortAlgorithm::Insertion => info(
            algorithm.name(),
            ["O(n)", "O(n²)", "O(n²)", "O(1)"],
            "Builds the sorted array one item at a time, shifting larger elements right \
             until the current item fits.",
        ),
        SortAlgorithm::Merge => info(
            algorithm.name(),
            ["O(n log n)", "O(n log n)", "O(n log n)", "O(n)"],
            "Divides the array into halves, sorts each half recursively and merges the two \
             sorted halves.",
        ),
        SortAlgorithm::Quick => info(
            algorithm.name(),
            ["O(n log n)", "O(n log n)", "O(n²)", "O(log n)"],
            "Picks the last element as pivot, partitions the range around it and recurses \
             into both sides.",
        ),
        SortAlgorithm::Heap => info(
            algorithm.name(),
            ["O(n log n)", "O(n log n)", "O(n log n)", "O(1)"],
            "Builds a max heap, then repeatedly moves the maximum to the end of the array \
             and restores the heap over the remaining prefix.",
        ),
    }
}

pub fn graph_info(algorithm: GraphAlgorithm) -> AlgorithmInfo {
    match algorithm {
        GraphAlgorithm::Bfs => info(
            algorithm.name(),
            ["O(V + E)", "O(V + E)", "O(V + E)", "O(V)"],
            "Explores the graph layer by layer, visiting every neighbor at the current \
             depth before moving one level deeper.",
        ),
        GraphAlgorithm::Dfs => info(
            algorithm.name(),
            ["O(V + E)", "O(V + E)", "O(V + E)", "O(V)"],
            "Explores as deep as possible along each branch before backtracking.",
        ),
        GraphAlgorithm::Dijkstra => info(
            algorithm.name(),
            ["O(V²)", "O(V²)", "O(V²)", "O(V)"],
            "Repeatedly settles the closest unvisited node and relaxes its outgoing edges, \
             yielding shortest paths for non-negative weights.",
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_algorithm_has_a_card() {
        for algorithm in SortAlgorithm::ALL {
            let card = sort_info(algorithm);
            assert!(card.name.ends_with("Sort"));
            assert!(!card.description.is_empty());
        }
        assert_eq!(sort_info(SortAlgorithm::Quick).complexity.worst, "O(n²)");
        assert_eq!(graph_info(GraphAlgorithm::Dijkstra).complexity.space, "O(V)");
    }
}

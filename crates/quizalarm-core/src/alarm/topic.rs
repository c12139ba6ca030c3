use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// Study topic an alarm can be tagged with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub enum Topic {
    ArraysAndStrings,
    LinkedLists,
    StacksAndQueues,
    TreesAndGraphs,
    DynamicProgramming,
    SortingAndSearching,
    Recursion,
    BitManipulation,
    GreedyAlgorithms,
    Backtracking,
}

impl Topic {
    pub const ALL: [Topic; 10] = [
        Topic::ArraysAndStrings,
        Topic::LinkedLists,
        Topic::StacksAndQueues,
        Topic::TreesAndGraphs,
        Topic::DynamicProgramming,
        Topic::SortingAndSearching,
        Topic::Recursion,
        Topic::BitManipulation,
        Topic::GreedyAlgorithms,
        Topic::Backtracking,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Topic::ArraysAndStrings => "Arrays & Strings",
            Topic::LinkedLists => "Linked Lists",
            Topic::StacksAndQueues => "Stacks & Queues",
            Topic::TreesAndGraphs => "Trees & Graphs",
            Topic::DynamicProgramming => "Dynamic Programming",
            Topic::SortingAndSearching => "Sorting & Searching",
            Topic::Recursion => "Recursion",
            Topic::BitManipulation => "Bit Manipulation",
            Topic::GreedyAlgorithms => "Greedy Algorithms",
            Topic::Backtracking => "Backtracking",
        }
    }
}

impl fmt::Display for Topic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Topic {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim();
        Topic::ALL
            .into_iter()
            .find(|t| t.label().eq_ignore_ascii_case(needle))
            .ok_or_else(|| ValidationError::UnknownTopic(s.to_string()))
    }
}

impl From<Topic> for String {
    fn from(topic: Topic) -> Self {
        topic.label().to_string()
    }
}

impl TryFrom<String> for Topic {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

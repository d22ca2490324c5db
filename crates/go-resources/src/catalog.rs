//! Resource catalog
//!
//! The compiled-in list of resources shown by the menu.

use thiserror::Error;

/// A single menu entry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Resource {
    pub name: &'static str,
    pub url: &'static str,
    pub description: &'static str,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CatalogError {
    #[error("index {index} out of range for catalog of {count} resources")]
    IndexOutOfRange { index: usize, count: usize },
}

const GO_RESOURCES: &[Resource] = &[
    Resource {
        name: "Go.dev",
        url: "https://go.dev",
        description: "Official Go website - documentation, tutorials, packages",
    },
    Resource {
        name: "Go by Example",
        url: "https://gobyexample.com",
        description: "Practical Go code examples with explanations",
    },
    Resource {
        name: "Effective Go",
        url: "https://go.dev/doc/effective_go",
        description: "Guide to writing effective Go code",
    },
    Resource {
        name: "Go Tour",
        url: "https://tour.golang.org",
        description: "Interactive tour of Go language basics",
    },
    Resource {
        name: "Awesome Go",
        url: "https://awesome-go.com",
        description: "Curated list of Go frameworks, libraries and resources",
    },
    Resource {
        name: "Codewars",
        url: "https://www.codewars.com/dashboard",
        description: "Programming practice platform",
    },
    Resource {
        name: "Exercism",
        url: "https://exercism.org/dashboard",
        description: "Coding exercises and practice",
    },
];

/// Read-only, ordered view over a static list of resources
///
/// Invariant: never empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Catalog {
    resources: &'static [Resource],
}

impl Default for Catalog {
    fn default() -> Self {
        Self::go_resources()
    }
}

impl Catalog {
    /// The Go learning resources shipped with the application
    pub fn go_resources() -> Self {
        Self {
            resources: GO_RESOURCES,
        }
    }

    pub fn count(&self) -> usize {
        self.resources.len()
    }

    pub fn get(&self, index: usize) -> Result<&'static Resource, CatalogError> {
        self.resources
            .get(index)
            .ok_or(CatalogError::IndexOutOfRange {
                index,
                count: self.count(),
            })
    }

    pub fn iter(&self) -> impl Iterator<Item = &'static Resource> {
        self.resources.iter()
    }
}

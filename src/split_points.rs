use anyhow::{anyhow, Result};
use std::collections::BTreeSet;

/// A half-open, 0-indexed page interval `[start, end)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Chunk {
    pub start: u32,
    pub end: u32,
}

impl Chunk {
    pub fn is_degenerate(&self) -> bool {
        self.start >= self.end
    }

    /// First page of the chunk, 1-indexed
    pub fn first_page(&self) -> u32 {
        self.start + 1
    }

    /// Last page of the chunk, 1-indexed and inclusive
    pub fn last_page(&self) -> u32 {
        self.end
    }

    pub fn page_count(&self) -> u32 {
        self.end.saturating_sub(self.start)
    }

    pub fn file_name(&self) -> String {
        format!("chunk_{}_to_{}.pdf", self.first_page(), self.last_page())
    }
}

/// Split points that survived bounds checking, plus the ones that did not.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedPoints {
    pub points: Vec<u32>,
    pub dropped: Vec<i64>,
}

/// Remove duplicates and sort ascending
pub fn normalize(points: &[i64]) -> Vec<i64> {
    points
        .iter()
        .copied()
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

/// Normalize and keep only points with `1 <= p < total_pages`
pub fn validate(points: &[i64], total_pages: u32) -> ValidatedPoints {
    let (kept, dropped): (Vec<i64>, Vec<i64>) = normalize(points)
        .into_iter()
        .partition(|&p| p >= 1 && p < i64::from(total_pages));

    ValidatedPoints {
        // every kept point is in 1..total_pages, so it fits in a u32
        points: kept.into_iter().map(|p| p as u32).collect(),
        dropped,
    }
}

/// `[0] + points + [total_pages]`
pub fn boundaries(points: &[u32], total_pages: u32) -> Vec<u32> {
    let mut bounds = Vec::with_capacity(points.len() + 2);
    bounds.push(0);
    bounds.extend_from_slice(points);
    bounds.push(total_pages);
    bounds
}

/// Chunks between adjacent boundaries, with degenerate intervals skipped
pub fn chunks(boundaries: &[u32]) -> Vec<Chunk> {
    boundaries
        .windows(2)
        .map(|pair| Chunk {
            start: pair[0],
            end: pair[1],
        })
        .filter(|chunk| !chunk.is_degenerate())
        .collect()
}

/// Shift every split page by the number of front-matter pages
pub fn apply_offset(pages: &[i64], offset: i64) -> Vec<i64> {
    pages.iter().map(|p| p.saturating_add(offset)).collect()
}

/// Parse a comma-separated list of split pages like "3,21,77"
pub fn parse_split_list(s: &str) -> Result<Vec<i64>> {
    let s = s.trim();
    if s.is_empty() {
        return Ok(Vec::new());
    }

    s.split(',')
        .map(|part| {
            let part = part.trim();
            if part.is_empty() {
                return Err(anyhow!("Empty entry in split page list: {}", s));
            }
            part.parse::<i64>()
                .map_err(|_| anyhow!("Invalid split page: {}", part))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plan(points: &[i64], total_pages: u32) -> Vec<Chunk> {
        let valid = validate(points, total_pages);
        chunks(&boundaries(&valid.points, total_pages))
    }

    fn names(chunks: &[Chunk]) -> Vec<String> {
        chunks.iter().map(Chunk::file_name).collect()
    }

    #[test]
    fn test_three_chunks() {
        let chunks = plan(&[21, 77], 100);
        assert_eq!(
            names(&chunks),
            vec![
                "chunk_1_to_21.pdf",
                "chunk_22_to_77.pdf",
                "chunk_78_to_100.pdf"
            ]
        );
        assert_eq!(chunks[1].page_count(), 56);
    }

    #[test]
    fn test_boundaries_shape() {
        assert_eq!(boundaries(&[21, 77], 100), vec![0, 21, 77, 100]);
        assert_eq!(boundaries(&[], 5), vec![0, 5]);
    }

    #[test]
    fn test_unsorted_duplicates_normalize() {
        assert_eq!(normalize(&[77, 21, 21]), vec![21, 77]);
        assert_eq!(plan(&[77, 21, 21], 100), plan(&[21, 77], 100));
    }

    #[test]
    fn test_out_of_range_points_dropped() {
        let valid = validate(&[0, 100], 100);
        assert!(valid.points.is_empty());
        assert_eq!(valid.dropped, vec![0, 100]);

        let valid = validate(&[-4, 0, 10, 99, 100, 250], 100);
        assert_eq!(valid.points, vec![10, 99]);
        assert_eq!(valid.dropped, vec![-4, 0, 100, 250]);
    }

    #[test]
    fn test_single_page_document_has_no_valid_points() {
        assert!(validate(&[1], 1).points.is_empty());
    }

    #[test]
    fn test_duplicate_point_gives_two_chunks() {
        assert_eq!(
            names(&plan(&[50, 50], 100)),
            vec!["chunk_1_to_50.pdf", "chunk_51_to_100.pdf"]
        );
    }

    #[test]
    fn test_degenerate_intervals_skipped() {
        let chunks = chunks(&[0, 50, 50, 100, 100]);
        assert_eq!(
            chunks,
            vec![Chunk { start: 0, end: 50 }, Chunk { start: 50, end: 100 }]
        );
    }

    #[test]
    fn test_chunks_partition_every_page() {
        let total = 37;
        let point_sets: [&[i64]; 4] = [&[1], &[36], &[5, 9, 9, 2, 30], &[1, 2, 3, 4, 35, 36]];
        for points in point_sets {
            let covered: Vec<u32> = plan(points, total)
                .iter()
                .flat_map(|c| c.start..c.end)
                .collect();
            assert_eq!(covered, (0..total).collect::<Vec<_>>(), "{:?}", points);
        }
    }

    #[test]
    fn test_apply_offset() {
        assert_eq!(apply_offset(&[3, 21, 77], 29), vec![32, 50, 106]);
        assert_eq!(apply_offset(&[i64::MAX], 1), vec![i64::MAX]);
    }

    #[test]
    fn test_parse_split_list() {
        assert_eq!(parse_split_list("3, 21,77").unwrap(), vec![3, 21, 77]);
        assert_eq!(parse_split_list("-2,5").unwrap(), vec![-2, 5]);
        assert!(parse_split_list("").unwrap().is_empty());
    }

    #[test]
    fn test_parse_split_list_rejects_garbage() {
        assert!(parse_split_list("3,,5").is_err());
        assert!(parse_split_list("3,end").is_err());
    }
}

//! Page / PageRequest - Offset pagination primitives

use serde::Serialize;

use crate::domain::errors::DomainError;

/// Validated request for one page of results (zero-based page index)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    page_number: u32,
    page_size: u32,
}

impl PageRequest {
    /// Build a page request, rejecting a negative index or a size below one
    pub fn of(page_number: i64, page_size: i64) -> Result<Self, DomainError> {
        if page_number < 0 {
            return Err(DomainError::InvalidArgument(
                "Page index must not be less than zero".to_string(),
            ));
        }
        if page_size < 1 {
            return Err(DomainError::InvalidArgument(
                "Page size must not be less than one".to_string(),
            ));
        }

        let page_number = u32::try_from(page_number).map_err(|_| {
            DomainError::InvalidArgument(format!("Page index {} is too large", page_number))
        })?;
        let page_size = u32::try_from(page_size).map_err(|_| {
            DomainError::InvalidArgument(format!("Page size {} is too large", page_size))
        })?;

        Ok(Self {
            page_number,
            page_size,
        })
    }

    pub fn page_number(&self) -> u32 {
        self.page_number
    }

    pub fn page_size(&self) -> u32 {
        self.page_size
    }

    /// Number of rows to skip
    pub fn offset(&self) -> u64 {
        u64::from(self.page_number) * u64::from(self.page_size)
    }
}

/// One page of content plus totals over the whole result set
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Page<T> {
    pub content: Vec<T>,
    pub page_number: u32,
    pub page_size: u32,
    pub total_elements: u64,
    pub total_pages: u64,
}

impl<T> Page<T> {
    pub fn new(content: Vec<T>, request: PageRequest, total_elements: u64) -> Self {
        let size = u64::from(request.page_size());
        Self {
            content,
            page_number: request.page_number(),
            page_size: request.page_size(),
            total_elements,
            total_pages: total_elements.div_ceil(size),
        }
    }

    /// Convert the content, keeping the page metadata
    pub fn map<U, F: FnMut(T) -> U>(self, f: F) -> Page<U> {
        Page {
            content: self.content.into_iter().map(f).collect(),
            page_number: self.page_number,
            page_size: self.page_size,
            total_elements: self.total_elements,
            total_pages: self.total_pages,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_negative_page_number() {
        let err = PageRequest::of(-1, 10).unwrap_err();
        assert!(matches!(err, DomainError::InvalidArgument(_)));
    }

    #[test]
    fn test_rejects_non_positive_page_size() {
        assert!(matches!(
            PageRequest::of(0, 0),
            Err(DomainError::InvalidArgument(_))
        ));
        assert!(matches!(
            PageRequest::of(0, -5),
            Err(DomainError::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_offset() {
        let request = PageRequest::of(3, 25).unwrap();
        assert_eq!(request.offset(), 75);
    }

    #[test]
    fn test_total_pages_rounds_up() {
        let request = PageRequest::of(0, 10).unwrap();
        assert_eq!(Page::new(vec![1, 2, 3], request, 21).total_pages, 3);
        assert_eq!(Page::new(Vec::<i32>::new(), request, 0).total_pages, 0);
        assert_eq!(Page::new(vec![1], request, 10).total_pages, 1);
    }

    #[test]
    fn test_map_keeps_metadata() {
        let request = PageRequest::of(1, 2).unwrap();
        let page = Page::new(vec![3, 4], request, 5).map(|n| n.to_string());

        assert_eq!(page.content, vec!["3".to_string(), "4".to_string()]);
        assert_eq!(page.page_number, 1);
        assert_eq!(page.page_size, 2);
        assert_eq!(page.total_elements, 5);
        assert_eq!(page.total_pages, 3);
    }
}

//! Course store operations.

use elite_driving_core::CourseId;

use super::Store;
use crate::models::{Course, CoursePatch, NewCourse};

impl Store {
    /// Create a course. Unlike registrations there is nothing to check, so
    /// this cannot fail.
    pub fn create_course(&self, new: NewCourse) -> Course {
        let course = Course {
            id: CourseId::generate(),
            title: new.title,
            description: new.description,
            course_type: new.course_type,
            duration: new.duration,
            capacity: new.capacity,
            price: new.price,
            features: new.features,
            is_active: new.is_active,
        };
        self.write().courses.insert(course.id, course.clone());
        course
    }

    /// Fetch a course by id.
    #[must_use]
    pub fn course(&self, id: CourseId) -> Option<Course> {
        self.read().courses.get(&id).cloned()
    }

    /// Every course, active or not, sorted by title for a stable listing.
    #[must_use]
    pub fn courses(&self) -> Vec<Course> {
        let mut courses: Vec<Course> = self.read().courses.values().cloned().collect();
        courses.sort_by(|a, b| a.title.cmp(&b.title));
        courses
    }

    /// Courses with the active flag set, sorted by title.
    #[must_use]
    pub fn active_courses(&self) -> Vec<Course> {
        let mut courses: Vec<Course> = self
            .read()
            .courses
            .values()
            .filter(|c| c.is_active == 1)
            .cloned()
            .collect();
        courses.sort_by(|a, b| a.title.cmp(&b.title));
        courses
    }

    /// Apply a partial update to a course. Returns `None` if the course does
    /// not exist.
    #[must_use]
    pub fn update_course(&self, id: CourseId, patch: CoursePatch) -> Option<Course> {
        let mut tables = self.write();
        let course = tables.courses.get_mut(&id)?;

        if let Some(title) = patch.title {
            course.title = title;
        }
        if let Some(description) = patch.description {
            course.description = description;
        }
        if let Some(course_type) = patch.course_type {
            course.course_type = course_type;
        }
        if let Some(duration) = patch.duration {
            course.duration = duration;
        }
        if let Some(capacity) = patch.capacity {
            course.capacity = capacity;
        }
        if let Some(price) = patch.price {
            course.price = price;
        }
        if let Some(features) = patch.features {
            course.features = features;
        }
        if let Some(is_active) = patch.is_active {
            course.is_active = is_active;
        }

        Some(course.clone())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;

    fn new_course(title: &str, capacity: u32) -> NewCourse {
        NewCourse {
            title: title.to_owned(),
            description: "test course".to_owned(),
            course_type: "light-vehicles".to_owned(),
            duration: "1 week".to_owned(),
            capacity,
            price: Decimal::new(10_000, 2),
            features: Vec::new(),
            is_active: 1,
        }
    }

    #[test]
    fn test_create_and_fetch() {
        let store = Store::new();
        let course = store.create_course(new_course("Trailer Towing", 5));

        let fetched = store.course(course.id).unwrap();
        assert_eq!(fetched.title, "Trailer Towing");
        assert_eq!(fetched.capacity, 5);
    }

    #[test]
    fn test_inactive_courses_hidden_from_active_listing() {
        let store = Store::new();
        let course = store.create_course(new_course("Night Driving", 5));

        let updated = store
            .update_course(
                course.id,
                CoursePatch {
                    is_active: Some(0),
                    ..CoursePatch::default()
                },
            )
            .unwrap();
        assert_eq!(updated.is_active, 0);

        assert!(store.active_courses().iter().all(|c| c.id != course.id));
        // Still present in the full listing.
        assert!(store.courses().iter().any(|c| c.id == course.id));
    }

    #[test]
    fn test_update_unknown_course_is_none() {
        let store = Store::new();
        assert!(
            store
                .update_course(CourseId::generate(), CoursePatch::default())
                .is_none()
        );
    }

    #[test]
    fn test_listing_sorted_by_title() {
        let store = Store::new();
        let titles: Vec<String> = store.courses().into_iter().map(|c| c.title).collect();
        let mut sorted = titles.clone();
        sorted.sort();
        assert_eq!(titles, sorted);
    }
}

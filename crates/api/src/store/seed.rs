//! Standard course catalog seeded at process start.

use rust_decimal::Decimal;

use crate::models::NewCourse;

/// The four standard courses offered by the institute.
pub(super) fn sample_courses() -> Vec<NewCourse> {
    vec![
        NewCourse {
            title: "Light Vehicles".to_owned(),
            description: "Learn to drive cars, SUVs, and light commercial vehicles with confidence"
                .to_owned(),
            course_type: "light-vehicles".to_owned(),
            duration: "4-6 weeks".to_owned(),
            capacity: 4,
            price: Decimal::new(120_000, 2),
            features: vec![
                "Basic vehicle operation and controls".to_owned(),
                "Traffic rules & road regulations".to_owned(),
                "Practical road training sessions".to_owned(),
                "Parking & maneuvering techniques".to_owned(),
                "Highway and city driving".to_owned(),
            ],
            is_active: 1,
        },
        NewCourse {
            title: "Heavy Vehicles".to_owned(),
            description: "Professional training for trucks and commercial vehicles with CDL preparation"
                .to_owned(),
            course_type: "heavy-vehicles".to_owned(),
            duration: "8-10 weeks".to_owned(),
            capacity: 3,
            price: Decimal::new(250_000, 2),
            features: vec![
                "Commercial vehicle operation".to_owned(),
                "Load management & securing".to_owned(),
                "Highway and long-distance driving".to_owned(),
                "Safety protocols & inspections".to_owned(),
                "CDL test preparation".to_owned(),
            ],
            is_active: 1,
        },
        NewCourse {
            title: "Motorcycle".to_owned(),
            description: "Comprehensive motorcycle riding training program for all skill levels"
                .to_owned(),
            course_type: "motorcycle".to_owned(),
            duration: "3-4 weeks".to_owned(),
            capacity: 6,
            price: Decimal::new(80_000, 2),
            features: vec![
                "Balance & control fundamentals".to_owned(),
                "City & highway riding".to_owned(),
                "Safety gear & protective equipment".to_owned(),
                "Weather condition training".to_owned(),
                "Emergency maneuvers".to_owned(),
            ],
            is_active: 1,
        },
        NewCourse {
            title: "Simulator".to_owned(),
            description: "Virtual reality driving training in a completely safe environment"
                .to_owned(),
            course_type: "simulator".to_owned(),
            duration: "2-3 weeks".to_owned(),
            capacity: 8,
            price: Decimal::new(60_000, 2),
            features: vec![
                "Risk-free learning environment".to_owned(),
                "Various driving scenarios".to_owned(),
                "Instant feedback & correction".to_owned(),
                "Weather & hazard simulation".to_owned(),
                "Perfect for nervous beginners".to_owned(),
            ],
            is_active: 1,
        },
    ]
}

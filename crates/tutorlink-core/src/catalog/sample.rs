//! Bundled sample catalog, used when no file or backend is configured

use crate::models::{TutorId, TutorRecord};

struct SampleTutor {
    id: &'static str,
    name: &'static str,
    subject: &'static str,
    price_per_hour: f64,
    availability: &'static str,
    location: &'static str,
    bio: &'static str,
    rating: f64,
    total_sessions: u32,
    contact_handle: &'static str,
}

const SAMPLE_TUTORS: [SampleTutor; 6] = [
    SampleTutor {
        id: "1",
        name: "Dr. Emily Brown",
        subject: "Mathematics",
        price_per_hour: 35.0,
        availability: "Weekdays 6-9 PM, Weekends 10 AM-2 PM",
        location: "New York, NY",
        bio: "PhD in Mathematics with 10+ years of teaching experience. Specializing in calculus, algebra, and statistics.",
        rating: 4.9,
        total_sessions: 127,
        contact_handle: "+1234567890",
    },
    SampleTutor {
        id: "2",
        name: "Prof. David Lee",
        subject: "Physics",
        price_per_hour: 40.0,
        availability: "Monday-Friday 4-8 PM",
        location: "Boston, MA",
        bio: "Experienced physics professor with expertise in mechanics, thermodynamics, and quantum physics.",
        rating: 4.8,
        total_sessions: 89,
        contact_handle: "+1234567891",
    },
    SampleTutor {
        id: "3",
        name: "Maria Garcia",
        subject: "English Literature",
        price_per_hour: 30.0,
        availability: "Tuesday-Thursday 5-9 PM, Saturday 9 AM-1 PM",
        location: "Los Angeles, CA",
        bio: "English literature specialist with focus on classic and modern literature, essay writing, and creative writing.",
        rating: 4.7,
        total_sessions: 156,
        contact_handle: "+1234567892",
    },
    SampleTutor {
        id: "4",
        name: "Dr. James Chen",
        subject: "Computer Science",
        price_per_hour: 45.0,
        availability: "Weekdays 7-10 PM, Sunday 2-6 PM",
        location: "San Francisco, CA",
        bio: "Software engineer with 15+ years experience. Teaching programming, algorithms, and software development.",
        rating: 4.9,
        total_sessions: 203,
        contact_handle: "+1234567893",
    },
    SampleTutor {
        id: "5",
        name: "Lisa Anderson",
        subject: "Chemistry",
        price_per_hour: 35.0,
        availability: "Monday, Wednesday, Friday 6-9 PM",
        location: "Chicago, IL",
        bio: "Chemistry professor specializing in organic chemistry, biochemistry, and laboratory techniques.",
        rating: 4.6,
        total_sessions: 78,
        contact_handle: "+1234567894",
    },
    SampleTutor {
        id: "6",
        name: "Robert Taylor",
        subject: "Biology",
        price_per_hour: 32.0,
        availability: "Tuesday, Thursday 4-7 PM, Saturday 10 AM-2 PM",
        location: "Miami, FL",
        bio: "Biology expert with focus on cell biology, genetics, and ecology.",
        rating: 4.8,
        total_sessions: 112,
        contact_handle: "+1234567895",
    },
];

/// The six bundled tutors, in catalog order
pub fn sample_catalog() -> Vec<TutorRecord> {
    SAMPLE_TUTORS
        .iter()
        .map(|sample| TutorRecord {
            id: TutorId::new(sample.id),
            name: sample.name.to_string(),
            subject: sample.subject.to_string(),
            price_per_hour: sample.price_per_hour,
            location: sample.location.to_string(),
            availability: sample.availability.to_string(),
            bio: sample.bio.to_string(),
            rating: sample.rating,
            total_sessions: sample.total_sessions,
            contact_handle: sample.contact_handle.to_string(),
        })
        .collect()
}

//! First-run bootstrap data. Idempotent: a collection that already exists is
//! left untouched, so reopening a store never duplicates or resets records.

use chrono::{TimeZone, Utc};
use serde_json::json;
use tracing::info;
use uuid::uuid;

use gramsurvey_store::RecordStore;
use gramsurvey_types::models::{Message, Role, Survey, SurveyStatus, User};

use crate::{MESSAGES_KEY, SURVEYS_KEY, USERS_KEY};

pub fn run(store: &RecordStore) {
    if !store.contains(USERS_KEY) {
        store.set(USERS_KEY, &default_users());
        info!("Seeded default users");
    }
    if !store.contains(SURVEYS_KEY) {
        store.set(SURVEYS_KEY, &default_surveys());
        info!("Seeded default surveys");
    }
    if !store.contains(MESSAGES_KEY) {
        store.set(MESSAGES_KEY, &default_messages());
        info!("Seeded default messages");
    }
}

fn default_users() -> Vec<User> {
    vec![
        User {
            id: uuid!("00000000-0000-0000-0000-000000000001"),
            username: "surveyor1".into(),
            password: "password123".into(),
            role: Role::Surveyor,
            name: "Rajesh Kumar".into(),
            email: "rajesh@example.com".into(),
            phone: "9876543210".into(),
        },
        User {
            id: uuid!("00000000-0000-0000-0000-000000000002"),
            username: "supervisor1".into(),
            password: "admin123".into(),
            role: Role::Supervisor,
            name: "Priya Sharma".into(),
            email: "priya@example.com".into(),
            phone: "9876543211".into(),
        },
    ]
}

fn default_surveys() -> Vec<Survey> {
    let jan_15 = Utc
        .with_ymd_and_hms(2024, 1, 15, 0, 0, 0)
        .single()
        .unwrap_or_default();
    let jan_10 = Utc
        .with_ymd_and_hms(2024, 1, 10, 0, 0, 0)
        .single()
        .unwrap_or_default();

    vec![
        Survey {
            id: uuid!("00000000-0000-0000-0001-000000000001"),
            title: "Village Infrastructure Survey".into(),
            description: "Assessment of basic infrastructure facilities".into(),
            created_by: "surveyor1".into(),
            created_at: jan_15,
            status: SurveyStatus::Submitted,
            approved_by: None,
            approved_at: None,
            form_data: json!({
                "villageName": "Gram Panchayat ABC",
                "population": 2500,
                "hasElectricity": true,
                "hasWaterSupply": true,
                "hasRoadConnectivity": true,
                "schoolsCount": 2,
                "hospitalsCount": 1,
                "issues": ["Water quality concerns", "Road maintenance needed"],
                "recommendations": "Improve water treatment facility and regular road maintenance",
            }),
        },
        Survey {
            id: uuid!("00000000-0000-0000-0001-000000000002"),
            title: "Agricultural Survey".into(),
            description: "Assessment of agricultural practices and challenges".into(),
            created_by: "surveyor1".into(),
            created_at: jan_10,
            status: SurveyStatus::Draft,
            approved_by: None,
            approved_at: None,
            form_data: json!({
                "villageName": "Gram Panchayat XYZ",
                "totalLandArea": 500,
                "cultivatedLand": 350,
                "mainCrops": ["Wheat", "Rice", "Sugarcane"],
                "irrigationMethods": ["Tube well", "Canal"],
                "challenges": ["Water scarcity", "Pesticide costs"],
                "suggestions": "Promote drip irrigation and organic farming",
            }),
        },
    ]
}

fn default_messages() -> Vec<Message> {
    let jan_16 = Utc
        .with_ymd_and_hms(2024, 1, 16, 0, 0, 0)
        .single()
        .unwrap_or_default();

    vec![
        Message {
            id: uuid!("00000000-0000-0000-0002-000000000001"),
            from: "supervisor1".into(),
            to: "surveyor1".into(),
            subject: "Survey Review".into(),
            content: "Please review the submitted survey and provide additional details about water quality issues.".into(),
            timestamp: jan_16,
            read: false,
        },
        Message {
            id: uuid!("00000000-0000-0000-0002-000000000002"),
            from: "surveyor1".into(),
            to: "supervisor1".into(),
            subject: "Re: Survey Review".into(),
            content: "I have updated the survey with detailed water quality analysis. Please review.".into(),
            timestamp: jan_16,
            read: true,
        },
    ]
}

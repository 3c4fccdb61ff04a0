//! Fixture catalog shared by the integration tests

#![allow(dead_code)]

use delegate_dash::domain::Catalog;

pub const FIXTURE: &str = r#"
panels = ["overview", "reports"]

[[nav]]
key = "overview"
label = "Overview"

[[nav]]
key = "reports"
label = "Reports"

[[nav]]
key = "archive"
label = "Archive"

[headings.overview]
title = "Overview"
subtitle = "Everything at a glance"

[headings.reports]
title = "Reports"
subtitle = "Weekly digests"

[[meetings]]
id = 10
title = "Budget Committee"
meta = "Mon, 9:00 AM • 12 attendees • 40 minutes"
summary = "Travel grant budget was reviewed."

[[meetings.topics]]
name = "Travel grants"
minutes = 25
note = "Demand exceeds allocation."

[[meetings.action_items]]
priority = "high"
text = "Draft revised allocation"

[meetings.sentiment]
tone = "mixed"
positive = 40
neutral = 35
negative = 25

[[meetings]]
id = 20
title = "Housing Forum"
meta = "Wed, 6:00 PM • 30 attendees • 60 minutes"
summary = "Rent burden dominated the discussion."

[[activity]]
kind = "meeting"
label = "Budget Committee"
detail = "Summary ready"
meeting = 10

[[activity]]
kind = "survey"
label = "Pulse survey"
detail = "50 responses"

[[activity]]
kind = "meeting"
label = "Housing Forum"
detail = "Summary ready"
meeting = 20

[[stats]]
target = "stat-meetings"
label = "Meetings attended"
end = 12
duration_ms = 1000
"#;

pub fn fixture_catalog() -> Catalog {
    Catalog::from_toml_str(FIXTURE).expect("fixture catalog parses")
}

//! Built-in demo catalog

use std::collections::BTreeMap;

use super::catalog::Catalog;
use super::engagement::{
    ActivityItem, ActivityKind, FeedbackEntry, Issue, IssueCategory, StatCounter,
};
use super::meeting::{
    ActionItem, CriticalIssue, MeetingRecord, MeetingStatus, Priority, Quote, SentimentBreakdown,
    Tone, Topic,
};
use super::view::{Heading, NavEntry, ViewKey};

impl Catalog {
    pub fn builtin() -> Self {
        let nav = vec![
            NavEntry::new("dashboard", "Dashboard"),
            NavEntry::new("meetings", "Meetings"),
            NavEntry::new("feedback", "Feedback"),
            NavEntry::new("insights", "Insights"),
        ];
        let panels = nav.iter().map(|entry| entry.key.clone()).collect::<Vec<ViewKey>>();

        let mut headings = BTreeMap::new();
        headings.insert(
            "dashboard".to_string(),
            Heading::new("Dashboard", "Your constituent engagement overview"),
        );
        headings.insert(
            "meetings".to_string(),
            Heading::new("Meetings", "AI-attended meetings and summaries"),
        );
        headings.insert(
            "feedback".to_string(),
            Heading::new("Constituent Feedback", "Direct responses from your constituents"),
        );
        headings.insert(
            "insights".to_string(),
            Heading::new("Insights", "AI-powered patterns and recommendations"),
        );

        Self {
            nav,
            panels,
            headings,
            meetings: vec![sloan_town_hall(), eecs_department(), housing_forum()],
            activity: activity(),
            stats: vec![
                stat("stat-meetings", "Meetings attended", 12, 1000),
                stat("stat-constituents", "Constituents reached", 847, 1500),
                stat("stat-issues", "Issues tracked", 43, 1200),
            ],
            feedback: feedback(),
            issues: issues(),
        }
    }
}

fn stat(target: &str, label: &str, end: i64, duration_ms: u64) -> StatCounter {
    StatCounter {
        target: target.to_string(),
        label: label.to_string(),
        start: 0,
        end,
        duration_ms,
    }
}

fn topic(name: &str, minutes: u32, note: &str) -> Topic {
    Topic {
        name: name.to_string(),
        minutes,
        note: note.to_string(),
    }
}

fn quote(text: &str, speaker: &str) -> Quote {
    Quote {
        text: text.to_string(),
        speaker: speaker.to_string(),
    }
}

fn action(priority: Priority, text: &str) -> ActionItem {
    ActionItem {
        priority,
        text: text.to_string(),
    }
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|item| item.to_string()).collect()
}

fn sloan_town_hall() -> MeetingRecord {
    MeetingRecord {
        id: 1,
        title: "MIT Sloan MBA Town Hall".to_string(),
        meta: "Today, 2:00 PM • 45 attendees • 78 minutes".to_string(),
        status: MeetingStatus::Completed,
        summary: "The Sloan MBA Town Hall focused on three primary areas: career services \
                  improvements, networking opportunities, and mental health resources. Overall \
                  sentiment was positive with constructive feedback."
            .to_string(),
        topics: vec![
            topic(
                "Career Services",
                40,
                "Students expressed satisfaction with new industry panel series. Request for \
                 more tech startup connections and international job search support.",
            ),
            topic(
                "Networking Events",
                25,
                "Positive feedback on alumni mixer format. Students want more cross-program \
                 events (MBA + Engineering).",
            ),
            topic(
                "Mental Health Resources",
                13,
                "Concerns about recruiting stress and work-life balance. Students want \
                 MBA-specific counseling options.",
            ),
        ],
        quotes: vec![
            quote(
                "The new industry panel series has been incredibly valuable. Can we get more \
                 representation from tech startups and venture capital?",
                "2nd year MBA student",
            ),
            quote(
                "Recruiting season is intense. We need mental health resources specifically for \
                 MBA students dealing with job search stress and multiple deadlines.",
                "1st year MBA student",
            ),
            quote(
                "I love the cross-functional aspect of MIT. More events that bring MBAs together \
                 with engineers and scientists would be amazing.",
                "Sloan Fellow",
            ),
        ],
        action_items: vec![
            action(
                Priority::High,
                "Connect with Career Services about expanding tech startup and VC recruiting \
                 resources",
            ),
            action(
                Priority::High,
                "Propose MBA-specific mental health counseling sessions focused on recruiting \
                 stress",
            ),
            action(
                Priority::Medium,
                "Work with other school GSC reps to organize cross-program networking events",
            ),
        ],
        sentiment: Some(SentimentBreakdown {
            tone: Tone::Positive,
            positive: 70,
            neutral: 25,
            negative: 5,
            note: "Students are generally satisfied with current offerings but see clear \
                   opportunities for improvement. Mental health concerns, while only 5% negative \
                   sentiment, were raised with high urgency."
                .to_string(),
        }),
        recommendations: strings(&[
            "Schedule follow-up meeting with Career Services Director within 2 weeks",
            "Survey MBA students specifically about mental health needs during recruiting",
            "Present cross-program event proposal at next GSC meeting",
            "Share positive feedback with Career Services team to encourage continued innovation",
        ]),
        critical_issues: Vec::new(),
    }
}

fn eecs_department() -> MeetingRecord {
    MeetingRecord {
        id: 2,
        title: "EECS Department Meeting".to_string(),
        meta: "Yesterday, 4:00 PM • 62 attendees • 52 minutes".to_string(),
        status: MeetingStatus::Completed,
        summary: "EECS department meeting revealed significant concerns about course load, TA \
                  support, and mental health resources. Faculty and students both raised \
                  workload concerns. This is a high-priority issue requiring immediate attention."
            .to_string(),
        topics: vec![
            topic(
                "Course Load & Requirements",
                30,
                "PhD students feeling overwhelmed with coursework + research expectations. \
                 Discussion about reducing required courses or extending timeline.",
            ),
            topic(
                "TA Support & Compensation",
                15,
                "TAs requesting better training and compensation review. Students concerned \
                 about hours vs. compensation ratio.",
            ),
            topic(
                "Mental Health Resources",
                7,
                "CRITICAL - Multiple students reported 3-4 week wait times for counseling \
                 appointments. PhD students want specialized support for research stress and \
                 advisor relationships.",
            ),
        ],
        quotes: vec![
            quote(
                "I've been trying to get a counseling appointment for three weeks. By the time I \
                 get in, my crisis moment has passed. We need better mental health support.",
                "4th year PhD student",
            ),
            quote(
                "The pressure of coursework plus research plus TA duties is unsustainable. \
                 Something has to give, but we're afraid it will be our research progress.",
                "2nd year PhD student",
            ),
            quote(
                "We need support specifically for PhD students dealing with advisor \
                 relationships and research setbacks. The general counseling doesn't address \
                 our unique challenges.",
                "3rd year PhD student",
            ),
        ],
        action_items: vec![
            action(
                Priority::Urgent,
                "Emergency request for increased mental health counseling capacity - bring to \
                 GSC immediately",
            ),
            action(Priority::Urgent, "Propose PhD-specific mental health support program"),
            action(Priority::High, "Work with EECS department on course load policy review"),
            action(
                Priority::High,
                "Survey other departments to see if mental health wait times are \
                 university-wide issue",
            ),
            action(Priority::Medium, "Review TA compensation with administration"),
        ],
        sentiment: Some(SentimentBreakdown {
            tone: Tone::Mixed,
            positive: 40,
            neutral: 35,
            negative: 25,
            note: "Mixed sentiment with clear frustration about mental health resources and \
                   workload. Students appreciate department's willingness to discuss issues but \
                   want concrete action."
                .to_string(),
        }),
        recommendations: Vec::new(),
        critical_issues: vec![CriticalIssue {
            title: "Mental Health Crisis".to_string(),
            text: "This is the 3rd meeting this week where mental health wait times were cited \
                   as critical issue. Recommend making this #1 priority for GSC emergency session."
                .to_string(),
        }],
    }
}

fn housing_forum() -> MeetingRecord {
    MeetingRecord {
        id: 3,
        title: "Graduate Student Housing Forum".to_string(),
        meta: "Oct 24, 6:00 PM • 38 attendees • 65 minutes".to_string(),
        status: MeetingStatus::Completed,
        summary: "Housing forum revealed significant financial stress among graduate students \
                  due to rising Cambridge area rents. International students and those without \
                  family support particularly affected. Students seeking university intervention."
            .to_string(),
        topics: vec![
            topic(
                "Rental Costs",
                35,
                "Students reporting 50-60% of stipend going to rent. Multiple students \
                 considering leaving MIT due to financial unsustainability.",
            ),
            topic(
                "On-Campus Housing Shortage",
                20,
                "Waitlists for on-campus housing extending 18+ months. Students want priority \
                 system for international students and those with financial need.",
            ),
            topic(
                "University Support Options",
                10,
                "Discussion of housing subsidies, stipend increases, or expanded on-campus \
                 housing construction.",
            ),
        ],
        quotes: vec![
            quote(
                "I'm paying $2,200/month for a studio in Cambridge. That's 62% of my monthly \
                 stipend before food or anything else. I'm considering leaving MIT.",
                "International PhD student, Biology",
            ),
            quote(
                "As an international student, I can't live with family or get support from home \
                 easily. The housing costs here are making it impossible to focus on research.",
                "1st year Master's student",
            ),
        ],
        action_items: vec![
            action(
                Priority::High,
                "Compile housing cost data from graduate students across all departments",
            ),
            action(
                Priority::High,
                "Research housing subsidy programs at peer institutions (Stanford, Harvard, etc.)",
            ),
            action(
                Priority::Medium,
                "Propose pilot housing subsidy program to administration",
            ),
            action(
                Priority::Medium,
                "Request meeting with housing office about grad student priority system",
            ),
        ],
        sentiment: Some(SentimentBreakdown {
            tone: Tone::Negative,
            positive: 15,
            neutral: 30,
            negative: 55,
            note: "Predominantly negative sentiment reflecting real financial hardship. Students \
                   appreciate forum but want concrete solutions, not just discussion."
                .to_string(),
        }),
        recommendations: Vec::new(),
        critical_issues: Vec::new(),
    }
}

fn activity() -> Vec<ActivityItem> {
    vec![
        ActivityItem {
            kind: ActivityKind::Meeting,
            label: "MIT Sloan MBA Town Hall".to_string(),
            detail: "Summary ready • 45 attendees • 2 hours ago".to_string(),
            meeting: Some(1),
        },
        ActivityItem {
            kind: ActivityKind::Survey,
            label: "Mental Health Pulse Survey".to_string(),
            detail: "124 new responses • 5 hours ago".to_string(),
            meeting: None,
        },
        ActivityItem {
            kind: ActivityKind::Meeting,
            label: "EECS Department Meeting".to_string(),
            detail: "Summary ready • 62 attendees • Yesterday".to_string(),
            meeting: Some(2),
        },
    ]
}

fn feedback() -> Vec<FeedbackEntry> {
    let entry = |constituent: &str,
                 role: &str,
                 department: &str,
                 message: &str,
                 sentiment: Tone,
                 received: &str| FeedbackEntry {
        constituent: constituent.to_string(),
        role: role.to_string(),
        department: department.to_string(),
        message: message.to_string(),
        sentiment,
        received: received.to_string(),
    };
    vec![
        entry(
            "Anonymous",
            "PhD",
            "EECS",
            "Counseling wait times are still three weeks. Please keep pushing on this.",
            Tone::Negative,
            "1 hour ago",
        ),
        entry(
            "Priya S.",
            "MBA",
            "Sloan",
            "The industry panels have been great. More startup and VC speakers would help.",
            Tone::Positive,
            "3 hours ago",
        ),
        entry(
            "Anonymous",
            "Master's",
            "Mechanical Engineering",
            "Rent takes more than half of my stipend. Is the GSC looking at subsidies?",
            Tone::Negative,
            "Yesterday",
        ),
        entry(
            "Daniel K.",
            "PhD",
            "Biology",
            "Thanks for sharing the town hall summary so quickly.",
            Tone::Positive,
            "Yesterday",
        ),
        entry(
            "Anonymous",
            "PhD",
            "Chemistry",
            "TA hours keep growing while compensation stays flat.",
            Tone::Neutral,
            "2 days ago",
        ),
    ]
}

fn issues() -> Vec<Issue> {
    let issue = |title: &str,
                 description: &str,
                 category: IssueCategory,
                 priority: Priority,
                 mention_count: u32,
                 sentiment: Tone,
                 meeting: Option<u32>| Issue {
        title: title.to_string(),
        description: description.to_string(),
        category,
        priority,
        mention_count,
        sentiment,
        meeting,
    };
    vec![
        issue(
            "Counseling wait times",
            "3-4 week waits for counseling appointments cited across departments.",
            IssueCategory::MentalHealth,
            Priority::Urgent,
            14,
            Tone::Negative,
            Some(2),
        ),
        issue(
            "Rent burden",
            "Students report 50-60% of stipend going to rent.",
            IssueCategory::Housing,
            Priority::High,
            11,
            Tone::Negative,
            Some(3),
        ),
        issue(
            "PhD course load",
            "Coursework plus research plus TA duties seen as unsustainable.",
            IssueCategory::Academic,
            Priority::High,
            6,
            Tone::Mixed,
            Some(2),
        ),
        issue(
            "Startup and VC recruiting",
            "Demand for more tech startup and venture capital connections.",
            IssueCategory::Career,
            Priority::Medium,
            5,
            Tone::Positive,
            Some(1),
        ),
        issue(
            "TA compensation",
            "Hours versus compensation ratio under review.",
            IssueCategory::Funding,
            Priority::Medium,
            4,
            Tone::Neutral,
            Some(2),
        ),
        issue(
            "Cross-program events",
            "Interest in events bringing MBAs together with engineers and scientists.",
            IssueCategory::Other,
            Priority::Low,
            3,
            Tone::Positive,
            Some(1),
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_activity_mapping() {
        let catalog = Catalog::builtin();
        assert_eq!(catalog.activity_map(), vec![Some(1), None, Some(2)]);
    }

    #[test]
    fn test_builtin_every_nav_entry_has_heading_and_panel() {
        let catalog = Catalog::builtin();
        for entry in &catalog.nav {
            assert!(catalog.heading(&entry.key).is_some(), "{}", entry.key);
            assert!(catalog.has_panel(&entry.key), "{}", entry.key);
        }
    }

    #[test]
    fn test_builtin_stats() {
        let catalog = Catalog::builtin();
        let summary: Vec<(&str, i64, i64, u64)> = catalog
            .stats
            .iter()
            .map(|s| (s.target.as_str(), s.start, s.end, s.duration_ms))
            .collect();
        assert_eq!(
            summary,
            vec![
                ("stat-meetings", 0, 12, 1000),
                ("stat-constituents", 0, 847, 1500),
                ("stat-issues", 0, 43, 1200),
            ]
        );
    }

    #[test]
    fn test_builtin_sentiment_sums_to_hundred() {
        for meeting in &Catalog::builtin().meetings {
            let sentiment = meeting.sentiment.as_ref().unwrap();
            let total =
                u32::from(sentiment.positive) + u32::from(sentiment.neutral) + u32::from(sentiment.negative);
            assert_eq!(total, 100, "{}", meeting.title);
        }
    }
}

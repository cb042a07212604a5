//! Report content: the fixed outline and the section bodies.
//!
//! The outline is data, not control flow: [`build_report`] folds over
//! [`OUTLINE`] so the table of contents, section numbering, and section order
//! all come from one place.

use chrono::{DateTime, Local};
use log::debug;

use crate::model::{HeadingLevel, ReportDocument, TextStyle};

/// Title printed on the report cover and stored in the PDF metadata.
pub const REPORT_TITLE: &str = "Meeting Scheduler & Reminders App";

/// Version literal embedded in the title page and the output filename.
pub const REPORT_VERSION: &str = "2.0.0";

/// Inputs to content generation that vary between runs.
#[derive(Clone, Debug)]
pub struct ReportContext {
    generated_at: DateTime<Local>,
}

impl ReportContext {
    /// Context stamped with the current local time.
    pub fn now() -> Self {
        Self::at(Local::now())
    }

    /// Context stamped with a fixed timestamp.
    pub fn at(generated_at: DateTime<Local>) -> Self {
        Self { generated_at }
    }

    /// Generation date, e.g. "January 15, 2025".
    pub fn generated_date(&self) -> String {
        self.generated_at.format("%B %d, %Y").to_string()
    }

    /// Generation timestamp, e.g. "January 15, 2025 at 10:30 AM".
    pub fn generated_datetime(&self) -> String {
        self.generated_at.format("%B %d, %Y at %I:%M %p").to_string()
    }
}

/// A top-level report section: its title and the function emitting its body.
pub struct SectionSpec {
    /// Section title, without the number prefix.
    pub title: &'static str,
    body: fn(&mut ReportDocument),
}

/// The ten numbered sections, in document order.
pub static OUTLINE: &[SectionSpec] = &[
    SectionSpec {
        title: "Executive Summary",
        body: executive_summary,
    },
    SectionSpec {
        title: "Project Overview",
        body: project_overview,
    },
    SectionSpec {
        title: "Key Features",
        body: key_features,
    },
    SectionSpec {
        title: "Technical Architecture",
        body: technical_architecture,
    },
    SectionSpec {
        title: "Database Design",
        body: database_design,
    },
    SectionSpec {
        title: "Implementation Details",
        body: implementation_details,
    },
    SectionSpec {
        title: "Testing & Quality Assurance",
        body: testing_and_qa,
    },
    SectionSpec {
        title: "Deployment",
        body: deployment,
    },
    SectionSpec {
        title: "Future Enhancements",
        body: future_enhancements,
    },
    SectionSpec {
        title: "Conclusion",
        body: conclusion,
    },
];

/// Builds the complete report document: title page, table of contents, the
/// numbered sections from [`OUTLINE`], and the appendix.
pub fn build_report(ctx: &ReportContext) -> ReportDocument {
    let mut document = ReportDocument::new();

    title_page(&mut document, ctx);
    document.add_page_break();

    table_of_contents(&mut document);
    document.add_page_break();

    for (index, section) in OUTLINE.iter().enumerate() {
        document.add_heading(
            format!("{}. {}", index + 1, section.title),
            HeadingLevel::Section,
        );
        (section.body)(&mut document);
        document.add_page_break();
    }

    appendix(&mut document, ctx);

    debug!("assembled report with {} blocks", document.blocks().len());
    document
}

fn add_label(document: &mut ReportDocument, text: &str) {
    document.add_styled(text, TextStyle::new().bold());
}

fn title_page(document: &mut ReportDocument, ctx: &ReportContext) {
    document.add_heading(REPORT_TITLE, HeadingLevel::Title);

    document.add_centered(
        "AI-Powered Meeting Management System",
        TextStyle::new().with_font_size(16).bold(),
    );
    document.add_centered(
        format!("Version {REPORT_VERSION}"),
        TextStyle::new().with_font_size(14),
    );
    document.add_centered(
        format!("Generated: {}", ctx.generated_date()),
        TextStyle::new().with_font_size(12).italic(),
    );

    document.add_spacer();
    document.add_spacer();

    document.add_centered(
        "Flutter 3.0+ | Dart 3.0+ | Google Gemini AI | SQLite v3",
        TextStyle::new(),
    );
    document.add_centered(
        "Platform: Android & iOS | Status: Production Ready",
        TextStyle::new(),
    );
}

fn table_of_contents(document: &mut ReportDocument) {
    document.add_heading("Table of Contents", HeadingLevel::Section);
    for (index, section) in OUTLINE.iter().enumerate() {
        document.add_bullet(format!("{}. {}", index + 1, section.title), 0);
    }
}

fn executive_summary(document: &mut ReportDocument) {
    document.add_paragraph(
        "The Meeting Scheduler & Reminders App is a comprehensive mobile application \
         built with Flutter that revolutionizes meeting management through AI-powered \
         natural language processing using Google Gemini API. The application combines \
         intelligent scheduling, recurring meetings, customizable templates, and robust \
         offline functionality to deliver a seamless user experience.",
    );

    document.add_heading("Project Statistics", HeadingLevel::Subsection);
    let stats = [
        "Development Time: 6 weeks",
        "Version: 2.0.0",
        "Lines of Code: ~5,500+",
        "Database Version: 3 (SQLite)",
        "Programming Language: Dart",
        "Framework: Flutter 3.0+",
        "Supported Platforms: Android & iOS",
        "Release APK Size: 23.6 MB",
    ];
    for stat in stats {
        document.add_bullet(stat, 0);
    }
}

fn project_overview(document: &mut ReportDocument) {
    document.add_heading("2.1 Problem Statement", HeadingLevel::Subsection);
    document.add_paragraph(
        "Managing meetings effectively is a common challenge faced by students, \
         professionals, and organizations. Traditional calendar apps often lack \
         intelligent features, require manual data entry, and don't provide adequate \
         analytics or recurring meeting support.",
    );

    document.add_heading("2.2 Solution", HeadingLevel::Subsection);
    document.add_paragraph("Our application addresses these challenges by providing:");
    let solutions = [
        "AI-powered natural language scheduling - Create meetings using everyday language",
        "Recurring meetings - Automatic generation of daily, weekly, or monthly meetings",
        "Meeting templates - Quick creation with pre-configured settings",
        "Comprehensive analytics - Insights into meeting patterns and productivity",
        "Smart notifications - Multiple reminder options including meeting start time",
        "Offline-first architecture - Full functionality without internet connection",
    ];
    for solution in solutions {
        document.add_bullet(solution, 0);
    }

    document.add_heading("2.3 Target Audience", HeadingLevel::Subsection);
    let audiences = [
        "Students: Managing class schedules, study groups, and project meetings",
        "Professionals: Tracking work meetings, client calls, and team standups",
        "Teams: Coordinating recurring team meetings and sprint planning",
        "Individuals: Organizing personal appointments and social events",
    ];
    for audience in audiences {
        document.add_bullet(audience, 0);
    }
}

fn key_features(document: &mut ReportDocument) {
    document.add_feature_section(
        "3.1 Recurring Meetings (NEW in v2.0)",
        "Automatic scheduling system for repetitive meetings with flexible configuration.",
        &[
            "Frequency Options: Daily, Weekly, Monthly",
            "Custom Intervals: Every N days/weeks/months",
            "End Date Control: Specify when series should stop",
            "Batch Creation: All instances generated automatically",
            "Independent Management: Edit or delete individual occurrences",
            "Group Tracking: Linked via unique recurrence group ID",
        ],
    );

    document.add_feature_section(
        "3.2 Meeting Templates (NEW in v2.0)",
        "Pre-configured templates for quick meeting creation with reusable settings.",
        &[
            "Default Templates: Daily Standup (15 min), 1-on-1 (30 min), Team Meeting (60 min), Sprint Planning (120 min)",
            "Custom Templates: Create unlimited custom templates",
            "Quick Apply: One-tap to pre-fill meeting details",
            "Full CRUD: Create, Read, Update, Delete operations",
            "Template Management: Accessible from settings menu",
            "Template Fields: Title, duration, category, reminders, description, meeting link",
        ],
    );

    document.add_feature_section(
        "3.3 Meeting Notes (NEW in v2.0)",
        "Flexible notes field for storing agenda, action items, and references.",
        &[
            "Multi-line Text Field: 4 lines for comfortable input",
            "Optional Field: Use only when needed",
            "Persistent Storage: Saved with meeting data",
            "Easy Viewing: Displayed in meeting details with a notes icon",
            "Use Cases: Agenda items, action points, attachment references",
        ],
    );

    document.add_feature_section(
        "3.4 AI-Powered Scheduling",
        "Natural language processing using Google Gemini AI for intelligent meeting creation.",
        &[
            "Natural Language Input: \"Schedule team meeting tomorrow at 3 PM\"",
            "Smart Extraction: Automatically detects title, date, time, duration",
            "Participant Detection: Extracts names, emails, phone numbers",
            "Category Classification: Auto-categorizes as work, personal, or other",
            "Notification Intent: Recognizes when to notify participants",
            "Flexible Formats: Supports various date/time expressions",
        ],
    );

    document.add_feature_section(
        "3.5 Analytics Dashboard",
        "Comprehensive insights into meeting patterns and productivity metrics.",
        &[
            "Total Meetings: Count of all scheduled meetings",
            "Time Tracking: Total hours spent in meetings",
            "Average Duration: Mean meeting length calculation",
            "Status Breakdown: Upcoming vs Completed meetings",
            "Category Analysis: Percentage distribution with pie chart",
            "Top Participants: Most frequent meeting attendees",
            "Peak Hours: Bar chart showing busiest meeting times",
            "Time Filters: This Week, This Month, All Time views",
        ],
    );

    document.add_feature_section(
        "3.6 Smart Notifications & Reminders",
        "Multiple reminder options with exact alarm scheduling for timely notifications.",
        &[
            "Reminder Times: At start, 15 min, 1 hour, 1 day before",
            "Multiple Reminders: Select any combination per meeting",
            "Exact Alarms: Android 12+ compatible scheduling",
            "Persistent: Survive app restarts and device reboots",
            "Test Function: Verify notification settings work",
            "Notification Channels: Proper Android categorization",
        ],
    );

    document.add_feature_section(
        "3.7 Additional Features",
        "Supporting features that enhance the overall user experience.",
        &[
            "Meeting Link Generator: Quick Zoom, Google Meet, Teams links",
            "Share Invitations: Email, SMS, WhatsApp, or any app",
            "Interactive Calendar: Day, week, month, 2-week views",
            "Conflict Detection: Automatic overlapping meeting alerts",
            "Offline-First: Full functionality without internet",
            "Dark Mode: Automatic theme switching",
            "Material Design 3: Modern, clean interface",
        ],
    );
}

fn technical_architecture(document: &mut ReportDocument) {
    document.add_heading("4.1 Technology Stack", HeadingLevel::Subsection);

    add_label(document, "Frontend Framework:");
    document.add_bullet("Flutter SDK: 3.0+", 0);
    document.add_bullet("Dart: 3.0+", 0);
    document.add_bullet("Material Design: 3 (Material You)", 0);

    add_label(document, "State Management:");
    document.add_bullet("Provider: 6.1.1 (Reactive pattern)", 0);
    document.add_bullet("ChangeNotifier: State broadcasting", 0);
    document.add_bullet("Consumer Widgets: Efficient rebuilds", 0);

    add_label(document, "Database Layer:");
    document.add_bullet("SQLite: Local relational database (sqflite 2.3.0)", 0);
    document.add_bullet("Version: 3 (with automatic migrations)", 0);
    document.add_bullet(
        "Indexes: Optimized queries on dateTime, category, recurrenceGroupId",
        0,
    );

    add_label(document, "AI Integration:");
    document.add_bullet("Google Gemini AI: gemini-2.5-flash model", 0);
    document.add_bullet("Temperature: 0.2 (deterministic responses)", 0);
    document.add_bullet("Max Tokens: 1024", 0);

    add_label(document, "Key Dependencies:");
    let dependencies = [
        "flutter_local_notifications: 17.2.4 - Local notifications",
        "provider: 6.1.1 - State management",
        "sqflite: 2.3.0 - SQLite database",
        "table_calendar: 3.0.9 - Calendar UI",
        "share_plus: 10.1.4 - Sharing functionality",
        "url_launcher: 6.3.1 - URL handling",
        "uuid: 4.5.1 - Unique ID generation",
        "intl: 0.19.0 - Internationalization",
    ];
    for dependency in dependencies {
        document.add_bullet(dependency, 0);
    }

    document.add_heading("4.2 Project Structure", HeadingLevel::Subsection);
    let structure = [
        "lib/models/ - Data models (Meeting, MeetingTemplate, ChatMessage)",
        "lib/services/ - Business logic (Database, Gemini, Notifications, Recurrence)",
        "lib/providers/ - State management (MeetingProvider, ChatProvider)",
        "lib/screens/ - UI screens (Calendar, Chat, Templates, Analytics, Settings)",
        "lib/widgets/ - Reusable components (MeetingCard, ChatBubble)",
        "android/ - Android-specific configuration",
        "ios/ - iOS-specific configuration",
    ];
    for item in structure {
        document.add_bullet(item, 0);
    }

    document.add_heading("4.3 Architecture Patterns", HeadingLevel::Subsection);

    add_label(document, "1. Offline-First Design:");
    document.add_paragraph("User Action -> Provider -> Database Service -> SQLite -> UI Updates (Reactive)");

    add_label(document, "2. Service Layer Pattern:");
    document.add_paragraph("Screens/Widgets -> Providers (State) -> Services (Logic) -> Data Layer");

    add_label(document, "3. Provider Pattern:");
    document.add_paragraph("ChangeNotifier -> notifyListeners() -> Consumer Widgets Rebuild");
}

fn database_design(document: &mut ReportDocument) {
    document.add_heading("5.1 Database Schema (Version 3)", HeadingLevel::Subsection);

    add_label(document, "Meetings Table:");
    let meetings_fields = [
        "id: TEXT PRIMARY KEY (UUID v4)",
        "title: TEXT NOT NULL",
        "dateTime: TEXT NOT NULL (ISO 8601)",
        "durationMinutes: INTEGER NOT NULL",
        "description: TEXT (Optional)",
        "participants: TEXT NOT NULL (Comma-separated)",
        "category: TEXT NOT NULL (work/personal/other)",
        "reminderEnabled: INTEGER NOT NULL (0 or 1)",
        "reminderMinutesBefore: TEXT NOT NULL (JSON array)",
        "meetingLink: TEXT (v2 - Zoom/Meet/Teams URL)",
        "notes: TEXT (v3 - Meeting notes)",
        "isRecurring: INTEGER DEFAULT 0 (v3 - Boolean)",
        "recurrenceRule: TEXT (v3 - daily/weekly/monthly)",
        "recurrenceInterval: INTEGER (v3 - Repeat frequency)",
        "recurrenceEndDate: TEXT (v3 - ISO 8601)",
        "recurrenceGroupId: TEXT (v3 - Group UUID)",
        "createdAt: TEXT NOT NULL (ISO 8601)",
        "updatedAt: TEXT (ISO 8601)",
    ];
    for field in meetings_fields {
        document.add_bullet(field, 0);
    }

    document.add_spacer();
    add_label(document, "Templates Table (NEW in v3):");
    let template_fields = [
        "id: TEXT PRIMARY KEY (UUID v4)",
        "name: TEXT NOT NULL (Template name)",
        "title: TEXT NOT NULL (Default meeting title)",
        "durationMinutes: INTEGER NOT NULL",
        "description: TEXT (Optional)",
        "participants: TEXT NOT NULL",
        "category: TEXT NOT NULL",
        "reminderEnabled: INTEGER NOT NULL",
        "reminderMinutesBefore: TEXT NOT NULL",
        "meetingLink: TEXT (Optional)",
        "createdAt: TEXT NOT NULL",
    ];
    for field in template_fields {
        document.add_bullet(field, 0);
    }

    document.add_heading("5.2 Database Indexes", HeadingLevel::Subsection);
    let indexes = [
        "idx_meetings_datetime: Fast date range queries",
        "idx_meetings_category: Efficient category filtering",
        "idx_meetings_recurrence_group: Quick recurring series lookup (v3)",
    ];
    for index in indexes {
        document.add_bullet(index, 0);
    }

    document.add_heading("5.3 Migration Strategy", HeadingLevel::Subsection);
    document.add_paragraph("Database automatically upgrades from v1 -> v2 -> v3 without data loss:");
    let migrations = [
        "v1 -> v2: Added meetingLink column (NULL default)",
        "v2 -> v3: Added 6 recurring fields + notes field",
        "v2 -> v3: Created templates table with 11 columns",
        "v2 -> v3: Added recurrence group index",
        "All existing data preserved during migrations",
    ];
    for migration in migrations {
        document.add_bullet(migration, 0);
    }
}

fn implementation_details(document: &mut ReportDocument) {
    document.add_heading("6.1 Recurring Meetings Implementation", HeadingLevel::Subsection);
    document.add_paragraph("Algorithm: RecurrenceService.generateRecurringMeetings()");
    let recurrence_steps = [
        "Step 1: Validate recurrence settings (rule, interval, end date)",
        "Step 2: Generate unique group ID for series",
        "Step 3: Iterate from start date to end date",
        "Step 4: Create meeting instance with group ID",
        "Step 5: Calculate next occurrence based on rule",
        "Step 6: Repeat until end date reached",
        "Result: List of Meeting objects ready for database insertion",
    ];
    for step in recurrence_steps {
        document.add_bullet(step, 0);
    }

    document.add_heading("6.2 Template System Implementation", HeadingLevel::Subsection);
    let template_features = [
        "Default Template Creation: 4 templates auto-created on first launch",
        "Template Dialog: Full-screen dialog for create/edit operations",
        "Template Application: One-tap to pre-fill meeting form",
        "Template Storage: Separate templates table in SQLite",
        "Template CRUD: Full create, read, update, delete operations",
        "Integration: Accessible from add meeting screen and settings",
    ];
    for feature in template_features {
        document.add_bullet(feature, 0);
    }

    document.add_heading("6.3 AI Integration Details", HeadingLevel::Subsection);
    let ai_details = [
        "Model: Google Gemini 2.5-flash (optimized for speed)",
        "Prompt Engineering: Strict JSON output format",
        "Entity Extraction: Title, date, time, duration, participants",
        "Contact Detection: Email regex, phone number patterns",
        "Error Handling: Validation layer for API responses",
        "Timeout: 30 seconds with exponential backoff retry",
    ];
    for detail in ai_details {
        document.add_bullet(detail, 0);
    }
}

fn testing_and_qa(document: &mut ReportDocument) {
    document.add_heading("7.1 Testing Strategy", HeadingLevel::Subsection);
    let testing_areas = [
        "Unit Tests: Model serialization, date parsing, analytics calculations",
        "Widget Tests: UI component rendering and interactions",
        "Integration Tests: Database operations, API calls, notifications",
        "Manual Testing: Real device testing on Android and iOS",
    ];
    for area in testing_areas {
        document.add_bullet(area, 0);
    }

    document.add_heading("7.2 Quality Assurance Checks", HeadingLevel::Subsection);
    let qa_checks = [
        "No compilation errors",
        "All lint warnings resolved",
        "Database migration tested (v1 -> v2 -> v3)",
        "Offline functionality verified",
        "Notification permissions tested",
        "Dark mode compatibility checked",
        "Memory leak prevention (dispose controllers)",
        "API error handling validated",
    ];
    for check in qa_checks {
        document.add_bullet(check, 0);
    }

    document.add_heading("7.3 Performance Metrics", HeadingLevel::Subsection);
    let metrics = [
        "Average Query Time: < 5ms",
        "Insert Operation: < 10ms",
        "App Startup Time: < 2 seconds",
        "Meeting List Rendering: < 100ms (100 items)",
        "AI Response Time: 2-5 seconds (network dependent)",
        "APK Size: 23.6 MB (optimized)",
    ];
    for metric in metrics {
        document.add_bullet(metric, 0);
    }
}

fn deployment(document: &mut ReportDocument) {
    document.add_heading("8.1 Build Configuration", HeadingLevel::Subsection);

    add_label(document, "Android Build:");
    let android_config = [
        "Compile SDK: 34",
        "Min SDK: 21 (Android 5.0)",
        "Target SDK: 34",
        "Version Code: 1",
        "Version Name: 2.0.0",
        "Build Type: Release APK",
        "ProGuard: Disabled (for stability)",
    ];
    for config in android_config {
        document.add_bullet(config, 0);
    }

    document.add_heading("8.2 Build Commands", HeadingLevel::Subsection);
    document.add_paragraph("Release Build Process:");
    let commands = [
        "1. flutter clean - Clean build artifacts",
        "2. flutter pub get - Download dependencies",
        "3. flutter analyze - Run static analysis",
        "4. flutter build apk --release - Build release APK",
        "Output: build/app/outputs/flutter-apk/app-release.apk (23.6 MB)",
    ];
    for command in commands {
        document.add_bullet(command, 0);
    }

    document.add_heading("8.3 GitHub Repository", HeadingLevel::Subsection);
    let repo_info = [
        "Repository: github.com/vikram00014/Meeting-Scheduler-Reminders-App",
        "Branch: main",
        "Latest Commit: Add recurring meetings, templates, and notes features - v2.0.0",
        "Files: 15+ Dart files, 4+ documentation files",
        "License: MIT",
    ];
    for info in repo_info {
        document.add_bullet(info, 0);
    }
}

fn future_enhancements(document: &mut ReportDocument) {
    document.add_heading("9.1 Planned Features", HeadingLevel::Subsection);

    add_label(document, "Phase 1 (Q1 2026):");
    let phase1 = [
        "Home Screen Widgets (Android)",
        "Export/Import meetings (JSON/CSV)",
        "Custom reminder times",
        "Rich text notes editor",
    ];
    for item in phase1 {
        document.add_bullet(item, 0);
    }

    add_label(document, "Phase 2 (Q2 2026):");
    let phase2 = [
        "Calendar sync (Google Calendar, Outlook)",
        "Video call integration (direct join)",
        "File attachments support",
        "Voice input for AI chat",
        "Edit recurring series vs single occurrence",
    ];
    for item in phase2 {
        document.add_bullet(item, 0);
    }

    add_label(document, "Phase 3 (Q3 2026):");
    let phase3 = [
        "Multi-language support (i18n)",
        "Advanced analytics with predictions",
        "Team collaboration features",
        "Cloud backup (optional)",
        "Meeting transcription (AI-powered)",
    ];
    for item in phase3 {
        document.add_bullet(item, 0);
    }
}

fn conclusion(document: &mut ReportDocument) {
    document.add_paragraph(
        "The Meeting Scheduler & Reminders App successfully achieves its goal of \
         simplifying meeting management through AI-powered natural language processing, \
         recurring meeting automation, customizable templates, and comprehensive analytics. \
         Version 2.0.0 introduces significant enhancements that make scheduling more \
         efficient and user-friendly.",
    );

    document.add_heading("10.1 Key Achievements", HeadingLevel::Subsection);
    let achievements = [
        "Production-ready application with 23.6 MB APK",
        "Comprehensive feature set (15+ major features)",
        "AI-powered natural language scheduling",
        "Recurring meetings with flexible configuration",
        "Template system with 4 default templates",
        "Meeting notes for agenda and action items",
        "Offline-first architecture with SQLite v3",
        "Smart notifications with 4 reminder options",
        "Complete analytics dashboard",
        "Modern Material Design 3 UI with dark mode",
        "Comprehensive documentation (4 files)",
    ];
    for achievement in achievements {
        document.add_bullet(achievement, 0);
    }

    document.add_heading("10.2 Project Impact", HeadingLevel::Subsection);
    document.add_paragraph(
        "This application demonstrates the practical application of modern mobile \
         development technologies, AI integration, and user-centered design principles. \
         It provides a solid foundation for further development and can serve as a \
         valuable tool for anyone managing meetings and schedules.",
    );

    document.add_heading("10.3 Lessons Learned", HeadingLevel::Subsection);
    let lessons = [
        "Offline-first architecture ensures reliability and user trust",
        "AI requires strict prompt engineering for consistent results",
        "Database migrations must preserve existing user data",
        "State management patterns scale well with Provider",
        "Comprehensive error handling improves user experience",
        "Documentation is crucial for project maintenance",
    ];
    for lesson in lessons {
        document.add_bullet(lesson, 0);
    }
}

fn appendix(document: &mut ReportDocument, ctx: &ReportContext) {
    document.add_heading("Appendix", HeadingLevel::Section);

    document.add_heading("A. Documentation Files", HeadingLevel::Subsection);
    let docs = [
        "README.md - Complete project documentation",
        "FEATURES_ADDED.md - Detailed feature specifications",
        "QUICK_START_GUIDE.md - User-friendly how-to guide",
        "IMPLEMENTATION_SUMMARY.md - Technical implementation details",
    ];
    for doc_file in docs {
        document.add_bullet(doc_file, 0);
    }

    document.add_heading("B. Contact Information", HeadingLevel::Subsection);
    document.add_bullet(
        "Repository: github.com/vikram00014/Meeting-Scheduler-Reminders-App",
        0,
    );
    document.add_bullet("Developer: Vikram", 0);
    document.add_bullet(format!("Version: {REPORT_VERSION}"), 0);
    document.add_bullet(format!("Report Generated: {}", ctx.generated_datetime()), 0);

    document.add_spacer();
    document.add_spacer();
    document.add_centered(
        "Made with Flutter & Rust",
        TextStyle::new().with_font_size(10).italic(),
    );
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;
    use crate::model::Block;

    fn fixed_context() -> ReportContext {
        ReportContext::at(Local.with_ymd_and_hms(2025, 1, 15, 10, 30, 0).unwrap())
    }

    fn section_headings(document: &ReportDocument) -> Vec<&str> {
        document
            .blocks()
            .iter()
            .filter_map(|block| match block {
                Block::Heading {
                    text,
                    level: HeadingLevel::Section,
                } => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn ten_numbered_sections_in_fixed_order() {
        let document = build_report(&fixed_context());
        let headings = section_headings(&document);
        assert_eq!(
            headings,
            vec![
                "Table of Contents",
                "1. Executive Summary",
                "2. Project Overview",
                "3. Key Features",
                "4. Technical Architecture",
                "5. Database Design",
                "6. Implementation Details",
                "7. Testing & Quality Assurance",
                "8. Deployment",
                "9. Future Enhancements",
                "10. Conclusion",
                "Appendix",
            ]
        );
    }

    #[test]
    fn document_opens_with_the_title_heading() {
        let document = build_report(&fixed_context());
        assert!(matches!(
            document.blocks().first(),
            Some(Block::Heading {
                text,
                level: HeadingLevel::Title,
            }) if text == REPORT_TITLE
        ));
    }

    #[test]
    fn table_of_contents_is_derived_from_the_outline() {
        let document = build_report(&fixed_context());
        let blocks = document.blocks();
        let toc_start = blocks
            .iter()
            .position(|block| {
                matches!(block, Block::Heading { text, .. } if text == "Table of Contents")
            })
            .expect("table of contents heading");

        let toc_items: Vec<&str> = blocks[toc_start + 1..]
            .iter()
            .take_while(|block| !matches!(block, Block::PageBreak))
            .filter_map(|block| match block {
                Block::Bullet { text, .. } => Some(text.as_str()),
                _ => None,
            })
            .collect();

        let expected: Vec<String> = OUTLINE
            .iter()
            .enumerate()
            .map(|(index, section)| format!("{}. {}", index + 1, section.title))
            .collect();
        assert_eq!(toc_items, expected);
    }

    #[test]
    fn every_section_ends_with_a_page_break() {
        let document = build_report(&fixed_context());
        let page_breaks = document
            .blocks()
            .iter()
            .filter(|block| matches!(block, Block::PageBreak))
            .count();
        // Title page, table of contents, and each of the ten sections.
        assert_eq!(page_breaks, 12);
    }

    #[test]
    fn key_features_section_contains_numbered_subsections() {
        let document = build_report(&fixed_context());
        let subsections: Vec<&str> = document
            .blocks()
            .iter()
            .filter_map(|block| match block {
                Block::Heading {
                    text,
                    level: HeadingLevel::Subsection,
                } => Some(text.as_str()),
                _ => None,
            })
            .collect();
        assert!(subsections.contains(&"3.1 Recurring Meetings (NEW in v2.0)"));
        assert!(subsections.contains(&"3.7 Additional Features"));
    }

    #[test]
    fn generation_date_is_stamped_from_the_context() {
        let document = build_report(&fixed_context());
        let has_date_line = document.blocks().iter().any(|block| {
            matches!(block, Block::Paragraph { text, .. } if text == "Generated: January 15, 2025")
        });
        assert!(has_date_line);

        let has_timestamp_bullet = document.blocks().iter().any(|block| {
            matches!(
                block,
                Block::Bullet { text, .. }
                    if text == "Report Generated: January 15, 2025 at 10:30 AM"
            )
        });
        assert!(has_timestamp_bullet);
    }

    #[test]
    fn rebuilding_with_the_same_context_is_identical() {
        let ctx = fixed_context();
        assert_eq!(build_report(&ctx), build_report(&ctx));
    }
}

//! Static lookup tables for unit and lesson decoration
//!
//! Each lookup has a default for keys the table does not know.

/// Icon used for units without a dedicated one
pub const DEFAULT_UNIT_ICON: &str = "fa-book";

/// Gradient used for units without a dedicated one
pub const DEFAULT_UNIT_COLOR: &str = "var(--primary-gradient)";

/// Font Awesome icon name for a unit
pub fn unit_icon(number: u32) -> &'static str {
    match number {
        1 => "fa-star",        // Youth
        2 => "fa-smile",       // Humour
        3 => "fa-book-open",   // Education
        4 => "fa-leaf",        // Sustainable Development
        5 => "fa-female",      // Women and Power
        6 => "fa-university",  // Cultural Values
        7 => "fa-landmark",    // Citizenship
        8 => "fa-globe",       // International Organizations
        9 => "fa-microscope",  // Science and Technology
        10 => "fa-brain",      // Brain Drain
        11 => "fa-file-alt",   // Exam Corrections
        _ => DEFAULT_UNIT_ICON,
    }
}

/// CSS gradient variable for a unit card
pub fn unit_color(number: u32) -> &'static str {
    match number {
        1 | 11 => "var(--sunset-gradient)",
        2 => "var(--cosmic-gradient)",
        3 => "var(--ocean-gradient)",
        4 => "var(--forest-gradient)",
        5 => "var(--royal-gradient)",
        6 => "var(--warning-gradient)",
        7 => "var(--primary-gradient)",
        8 => "var(--accent-gradient)",
        9 => "var(--secondary-gradient)",
        10 => "var(--success-gradient)",
        _ => DEFAULT_UNIT_COLOR,
    }
}

/// Feminine Arabic ordinal for a unit number ("the first", ...)
pub fn arabic_ordinal(number: u32) -> String {
    let ordinal = match number {
        1 => "الأولى",
        2 => "الثانية",
        3 => "الثالثة",
        4 => "الرابعة",
        5 => "الخامسة",
        6 => "السادسة",
        7 => "السابعة",
        8 => "الثامنة",
        9 => "التاسعة",
        10 => "العاشرة",
        11 => "الحادية عشرة",
        _ => return format!("ال{number}"),
    };
    ordinal.to_string()
}

/// Arabic title for an English lesson title, or the title itself
pub fn arabic_lesson_title(english: &str) -> &str {
    match english {
        "The Gifts of Youth" => "مواهب الشباب",
        "Expressing Opinion - Agreeing and Disagreeing" => "التعبير عن الرأي - الموافقة والاختلاف",
        "Gerund and Infinitive" => "المصدر والفعل المضارع",
        "Reading Comprehension" => "فهم المقروء",
        "Writing a Descriptive Paragraph" => "كتابة فقرة وصفية",
        "Humour and Comedy" => "المرح والفكاهة",
        "Expressing Lack of Understanding and Asking for Clarification" => {
            "التعبير عن عدم الفهم وطلب التوضيح"
        }
        "Simple Modals and Perfect Modals" => "الأفعال المساعدة البسيطة والكاملة",
        "Writing a Funny Story" => "كتابة قصة مضحكة",
        "Education and Learning" => "التربية والتعليم",
        "Expressing Purpose" => "التعبير عن الهدف",
        "Simple Past and Past Perfect" => "الماضي البسيط والماضي التام",
        "Writing a Report" => "كتابة تقرير",
        "Sustainable Development" => "التنمية المستدامة",
        "Expressing Cause and Effect" => "التعبير عن السبب والنتيجة",
        "Future Perfect and Future Perfect Continuous" => "المستقبل التام والمستقبل التام المستمر",
        "Writing an Article" => "كتابة مقال",
        "Women and Power" => "المرأة والقوة",
        "Expressing Contrast" => "التعبير عن التباين",
        "Passive Voice" => "المبني للمجهول",
        "Writing a Biography" => "كتابة سيرة ذاتية",
        "Cultural Values" => "القيم الثقافية",
        "Expressing Addition" => "التعبير عن الإضافة",
        "Reported Speech" => "الكلام المنقول",
        "Writing a Formal Letter" => "كتابة رسالة رسمية",
        "Citizenship" => "المواطنة",
        "Expressing Condition" => "التعبير عن الشرط",
        "Conditional Type 2 and 3" => "الجملة الشرطية النوع الثاني والثالث",
        "Writing an Argumentative Essay" => "كتابة مقال جدلي",
        "International Organizations" => "المنظمات الدولية",
        "Expressing Emphasis" => "التعبير عن التأكيد",
        "Cleft Sentences" => "الجمل المنقسمة",
        "Writing a Summary" => "كتابة ملخص",
        "Science and Technology" => "العلم والتكنولوجيا",
        "Expressing Certainty and Uncertainty" => "التعبير عن اليقين وعدم اليقين",
        "Present Perfect Continuous and Past Perfect Continuous" => {
            "المضارع التام المستمر والماضي التام المستمر"
        }
        "Writing a Research Paper" => "كتابة ورقة بحثية",
        "Brain Drain" => "هجرة الأدمغة",
        "Expressing Concession" => "التعبير عن التنازل",
        "Subjunctive Mood" => "صيغة الشرط",
        "Writing a Proposal" => "كتابة اقتراح",
        "Exam Corrections" => "تصحيح الامتحانات",
        other => other,
    }
}

/// Split `"<arabic> (<english>)"` into its two labels
///
/// The English label is empty when the title has no ` (` part.
pub fn split_unit_title(title: &str) -> (&str, String) {
    let mut parts = title.split(" (");
    let arabic = parts.next().unwrap_or_default();
    let english = parts
        .next()
        .map(|part| part.replacen(')', "", 1))
        .unwrap_or_default();
    (arabic, english)
}

/// Singular or plural word for "lesson" matching `count`
pub fn lessons_word(count: usize) -> &'static str {
    if count == 1 {
        "درس"
    } else {
        "دروس"
    }
}

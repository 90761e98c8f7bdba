//! Static contest, testimonial and FAQ content

/// Contest that can still be registered for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UpcomingContest {
    /// Matches a contest type select value
    pub id: &'static str,
    pub name: &'static str,
    pub date: &'static str,
    pub location: &'static str,
    pub participants: &'static str,
    pub time: &'static str,
    pub days_left: u32,
}

/// Contest that has already finished
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PastContest {
    pub name: &'static str,
    pub date: &'static str,
    pub winner: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Testimonial {
    pub name: &'static str,
    pub role: &'static str,
    pub quote: &'static str,
    /// 1 to 5 stars
    pub rating: u8,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FaqEntry {
    pub question: &'static str,
    pub answer: &'static str,
}

pub const UPCOMING_CONTESTS: &[UpcomingContest] = &[
    UpcomingContest {
        id: "coding",
        name: "Coding Challenge",
        date: "June 15, 2025",
        location: "Online",
        participants: "Individual",
        time: "10:00 AM - 2:00 PM",
        days_left: 45,
    },
    UpcomingContest {
        id: "hackathon",
        name: "24-Hour Hackathon",
        date: "July 10-11, 2025",
        location: "Tech Hub Center",
        participants: "Teams of 2-4",
        time: "Starts at 9:00 AM",
        days_left: 70,
    },
    UpcomingContest {
        id: "datascience",
        name: "Data Science Competition",
        date: "August 5, 2025",
        location: "Online",
        participants: "Individual or Team",
        time: "All day event",
        days_left: 96,
    },
];

pub const PAST_CONTESTS: &[PastContest] = &[
    PastContest {
        name: "AI Innovation Challenge",
        date: "March 15, 2025",
        winner: "Team Innovate",
    },
    PastContest {
        name: "Web Dev Showdown",
        date: "February 20, 2025",
        winner: "CodeCrafters",
    },
    PastContest {
        name: "Mobile App Challenge",
        date: "January 10, 2025",
        winner: "AppWizards",
    },
];

pub const TESTIMONIALS: &[Testimonial] = &[
    Testimonial {
        name: "Mayank Joshi",
        role: "Student",
        quote: "The Coding Challenge was an incredible experience! It pushed me to think outside the box and improve my problem-solving skills.",
        rating: 5,
    },
    Testimonial {
        name: "Rishabh Sharma",
        role: "Student",
        quote: "Participating in the Data Science Competition helped me showcase my skills and connect with industry professionals. Highly recommended!",
        rating: 5,
    },
    Testimonial {
        name: "Aadarsh Singh",
        role: "Developer",
        quote: "The 24-Hour Hackathon was intense but incredibly rewarding. Our team created something amazing in just one day!",
        rating: 4,
    },
];

pub const FAQS: &[FaqEntry] = &[
    FaqEntry {
        question: "How do I register for a contest?",
        answer: "To register for a contest, simply fill out the registration form on this page. Select the contest you're interested in, provide your personal details, and submit the form. You'll receive a confirmation email with further instructions.",
    },
    FaqEntry {
        question: "Can I participate in multiple contests?",
        answer: "Yes, you can register for and participate in multiple contests. Each contest requires a separate registration. Make sure to check the dates to ensure there are no scheduling conflicts.",
    },
    FaqEntry {
        question: "What are the requirements for team registration?",
        answer: "For team registrations, you'll need to provide a team name and the number of team members. Each team member should be registered individually, mentioning the same team name. Team size requirements vary by contest, so please check the specific contest details.",
    },
    FaqEntry {
        question: "Are there any registration fees?",
        answer: "Registration fees vary by contest. Some contests are free to enter, while others may have a nominal fee. The fee details are provided in the specific contest information. Payment can be made online during registration.",
    },
    FaqEntry {
        question: "How will I know if my registration is confirmed?",
        answer: "After submitting your registration, you'll receive an immediate confirmation on the website. Additionally, a confirmation email will be sent to the email address you provided. If you don't receive an email within 24 hours, please check your spam folder or contact our support team.",
    },
];

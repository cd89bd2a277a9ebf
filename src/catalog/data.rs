use crate::models::{
    Ayat, Difficulty, Importance, Intention, IslamicEvent, QuizQuestion, VirtueAction,
};

pub static AYAT: &[Ayat] = &[
    Ayat {
        id: 1,
        surah: "Al-Baqarah",
        ayat_number: 286,
        arabic_text: "لَا يُكَلِّفُ اللَّهُ نَفْسًا إِلَّا وُسْعَهَا",
        translation: "Allah does not burden a soul beyond what it can bear",
        explanation: "Allah never gives us more than we can handle. Whatever difficulties we face, we have the capacity to overcome them with His help.",
        tags: &["ease", "difficulty", "burden"],
    },
    Ayat {
        id: 2,
        surah: "Al-Imran",
        ayat_number: 139,
        arabic_text: "وَلَا تَهِنُوا وَلَا تَحْزَنُوا وَأَنْتُمُ الْأَعْلَوْنَ إِنْ كُنْتُمْ مُؤْمِنِينَ",
        translation: "Do not lose heart nor fall into despair, for you will triumph if you are believers",
        explanation: "Believers are asked to remain steadfast and hopeful even in hard times. Faith gives the strength to overcome adversity.",
        tags: &["faith", "optimism", "perseverance"],
    },
    Ayat {
        id: 3,
        surah: "Al-Fatiha",
        ayat_number: 5,
        arabic_text: "إِيَّاكَ نَعْبُدُ وَإِيَّاكَ نَسْتَعِينُ",
        translation: "You alone we worship, and You alone we ask for help",
        explanation: "The essence of our relationship with Allah: worship is for Him alone, and we rely on Him alone for help in every matter.",
        tags: &["worship", "help", "reliance"],
    },
    Ayat {
        id: 4,
        surah: "Al-Duha",
        ayat_number: 5,
        arabic_text: "وَلَسَوْفَ يُعْطِيكَ رَبُّكَ فَتَرْضَى",
        translation: "And verily, your Lord will give you so that you shall be well-pleased",
        explanation: "Allah promises to give the believer what will satisfy them. Be patient; relief and reward are coming.",
        tags: &["patience", "reward", "satisfaction"],
    },
    Ayat {
        id: 5,
        surah: "Al-Inshirah",
        ayat_number: 5,
        arabic_text: "فَإِنَّ مَعَ الْعُسْرِ يُسْرًا",
        translation: "For indeed, with hardship comes ease",
        explanation: "After every difficulty comes relief. Stay hopeful through the hard days.",
        tags: &["hope", "ease", "difficulty"],
    },
];

pub static INTENTIONS: &[Intention] = &[
    Intention {
        id: 1,
        text: "Today I will try not to backbite or speak ill of others",
        category: "speech",
    },
    Intention {
        id: 2,
        text: "I will be thankful in every situation today",
        category: "gratitude",
    },
    Intention {
        id: 3,
        text: "I will perform all my prayers on time today",
        category: "worship",
    },
    Intention {
        id: 4,
        text: "I will read at least one page of Quran today",
        category: "worship",
    },
    Intention {
        id: 5,
        text: "I will give charity today, even if it's small",
        category: "charity",
    },
    Intention {
        id: 6,
        text: "I will smile at everyone I meet today",
        category: "kindness",
    },
    Intention {
        id: 7,
        text: "I will practice patience in difficult situations today",
        category: "character",
    },
];

pub static VIRTUE_ACTIONS: &[VirtueAction] = &[
    VirtueAction {
        id: "prayer",
        name: "Daily Prayer",
        points: 5,
        description: "Complete one of the five daily prayers",
    },
    VirtueAction {
        id: "jamaat",
        name: "Prayer in Congregation",
        points: 12,
        description: "Pray in congregation at the mosque",
    },
    VirtueAction {
        id: "tahajjud",
        name: "Tahajjud Prayer",
        points: 15,
        description: "Perform the night prayer",
    },
    VirtueAction {
        id: "quran",
        name: "Quran Reading",
        points: 3,
        description: "Read a page of Quran",
    },
    VirtueAction {
        id: "sadaqah",
        name: "Charity",
        points: 10,
        description: "Give sadaqah (charity)",
    },
    VirtueAction {
        id: "dhikr",
        name: "Dhikr",
        points: 2,
        description: "Complete a set of dhikr",
    },
];

pub static QUIZ_QUESTIONS: &[QuizQuestion] = &[
    QuizQuestion {
        id: 1,
        question: "How many pillars of Islam are there?",
        options: &["3", "4", "5", "6"],
        correct_answer: 2,
        explanation: "There are 5 pillars of Islam: Shahada (faith), Salah (prayer), Zakat (charity), Sawm (fasting), and Hajj (pilgrimage).",
        difficulty: Difficulty::Easy,
    },
    QuizQuestion {
        id: 2,
        question: "Which surah is known as the heart of the Quran?",
        options: &["Al-Fatiha", "Yasin", "Al-Ikhlas", "Al-Baqarah"],
        correct_answer: 1,
        explanation: "Surah Yasin is often called the heart of the Quran for its central message and importance.",
        difficulty: Difficulty::Medium,
    },
    QuizQuestion {
        id: 3,
        question: "How many times is the word 'Allah' mentioned in the Quran?",
        options: &["980", "1,464", "2,698", "2,195"],
        correct_answer: 2,
        explanation: "The word 'Allah' is mentioned 2,698 times in the Quran.",
        difficulty: Difficulty::Hard,
    },
];

// Gregorian dates shift every year with the lunar calendar.
pub static ISLAMIC_EVENTS: &[IslamicEvent] = &[
    IslamicEvent {
        id: 1,
        name: "Ramadan",
        hijri_date: "1 Ramadan",
        gregorian_date: "2025-03-01",
        description: "The holy month of fasting, prayer, and reflection",
        importance: Importance::Major,
    },
    IslamicEvent {
        id: 2,
        name: "Eid al-Fitr",
        hijri_date: "1 Shawwal",
        gregorian_date: "2025-04-01",
        description: "The festival of breaking the fast that marks the end of Ramadan",
        importance: Importance::Major,
    },
    IslamicEvent {
        id: 3,
        name: "Eid al-Adha",
        hijri_date: "10 Dhul Hijjah",
        gregorian_date: "2025-06-07",
        description: "The festival of sacrifice that marks the end of Hajj",
        importance: Importance::Major,
    },
    IslamicEvent {
        id: 4,
        name: "Day of Arafah",
        hijri_date: "9 Dhul Hijjah",
        gregorian_date: "2025-06-06",
        description: "The day when pilgrims gather at the plain of Arafat",
        importance: Importance::Major,
    },
    IslamicEvent {
        id: 5,
        name: "Laylatul Qadr",
        hijri_date: "27 Ramadan (approx)",
        gregorian_date: "2025-03-27",
        description: "The Night of Power, better than a thousand months",
        importance: Importance::Major,
    },
];

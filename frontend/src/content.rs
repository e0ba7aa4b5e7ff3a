//! Static copy and media for the landing page.

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct NavItem {
    pub id: &'static str,
    pub label: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FaqItem {
    pub id: &'static str,
    pub question: &'static str,
    pub answer: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GalleryImage {
    pub id: &'static str,
    pub src: &'static str,
    pub alt: &'static str,
    pub width: u32,
    pub height: u32,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Testimonial {
    pub id: u32,
    pub name: &'static str,
    pub rating: i32,
    pub comment: &'static str,
    pub image: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Service {
    pub icon: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub image_url: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Feature {
    pub icon: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Stat {
    pub value: &'static str,
    pub label: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SocialLink {
    pub id: &'static str,
    pub href: &'static str,
    pub aria_label: &'static str,
}

// Section anchors. Nav items point at these.
pub const HOME_ID: &str = "home";
pub const ABOUT_ID: &str = "about";
pub const MENU_ID: &str = "menu";
pub const GALLERY_ID: &str = "gallery";
pub const TESTIMONIALS_ID: &str = "testimonials";
pub const FAQ_ID: &str = "faq";
pub const CTA_ID: &str = "cta";
pub const CONTACT_ID: &str = "contact";

#[cfg(test)]
pub const SECTION_IDS: [&str; 8] = [
    HOME_ID,
    ABOUT_ID,
    MENU_ID,
    GALLERY_ID,
    TESTIMONIALS_ID,
    FAQ_ID,
    CTA_ID,
    CONTACT_ID,
];

pub const NAV_ITEMS: &[NavItem] = &[
    NavItem { id: HOME_ID, label: "ראשי" },
    NavItem { id: MENU_ID, label: "תפריט" },
    NavItem { id: ABOUT_ID, label: "אודות" },
    NavItem { id: GALLERY_ID, label: "גלריה" },
    NavItem { id: CONTACT_ID, label: "צור קשר" },
];

pub const HERO_IMAGE: &str = "https://images.unsplash.com/photo-1517248135467-4c7edcad34c4?ixlib=rb-4.0.3&auto=format&fit=crop&w=2070&q=80";
pub const ABOUT_IMAGE: &str = "https://images.unsplash.com/photo-1555396273-367ea4eb4db5?ixlib=rb-4.0.3&auto=format&fit=crop&w=1074&q=80";
pub const CTA_IMAGE: &str = "https://images.unsplash.com/photo-1555396273-367ea4eb4db5?ixlib=rb-4.0.3&auto=format&fit=crop&w=1974&q=80";
pub const CONTACT_IMAGE: &str = "https://images.unsplash.com/photo-1555396273-367ea4eb4db5?ixlib=rb-4.0.3&auto=format&fit=crop&w=1374&q=80";
pub const FOOTER_LOGO: &str = "https://images.unsplash.com/photo-1555396273-367ea4eb4db5?ixlib=rb-4.0.3&auto=format&fit=crop&w=200&q=80";

pub const TAGLINE: &str = "אנחנו מסעדה מוביל בתחום המזון עם ניסיון של שנים רבות. אנחנו מתמחים במתן שירות מקצועי ואיכותי ללקוחותינו.";

pub const FEATURES: &[Feature] = &[
    Feature {
        icon: "🍽",
        title: "מומחיות קולינרית",
        description: "השפים שלנו מביאים ניסיון של שנים רבות ביצירת מנות ייחודיות המשלבות טעמים מסורתיים וחדשניים.",
    },
    Feature {
        icon: "🏅",
        title: "איכות ללא פשרות",
        description: "אנו בוחרים רק את חומרי הגלם הטריים והאיכותיים ביותר כדי להבטיח חוויה קולינרית מושלמת.",
    },
    Feature {
        icon: "👥",
        title: "שירות מקצועי",
        description: "הצוות שלנו מחויב להעניק לכם את השירות הטוב ביותר ולהפוך כל ביקור לחוויה בלתי נשכחת.",
    },
];

pub const STATS: &[Stat] = &[
    Stat { value: "15+", label: "שנות ניסיון" },
    Stat { value: "50+", label: "מנות ייחודיות" },
    Stat { value: "10K+", label: "לקוחות מרוצים" },
];

pub const SERVICES: &[Service] = &[
    Service {
        icon: "🍽",
        title: "חוויית אירוח יוקרתית",
        description: "אווירה מיוחדת ושירות מסור שיהפכו את הארוחה שלכם לחוויה בלתי נשכחת",
        image_url: "https://images.unsplash.com/photo-1414235077428-338989a2e8c0?ixlib=rb-1.2.1&auto=format&fit=crop&w=500&q=60",
    },
    Service {
        icon: "🎂",
        title: "אירועים פרטיים",
        description: "חגיגות ימי הולדת, אירועים משפחתיים ומפגשים עסקיים באווירה מיוחדת",
        image_url: "https://images.unsplash.com/photo-1464349095431-e9a21285b5f3?ixlib=rb-1.2.1&auto=format&fit=crop&w=500&q=60",
    },
    Service {
        icon: "🚚",
        title: "שירותי קייטרינג",
        description: "מביאים את הטעמים המיוחדים שלנו לכל אירוע, בכל מקום ובכל היקף",
        image_url: "https://images.unsplash.com/photo-1555244162-803834f70033?ixlib=rb-1.2.1&auto=format&fit=crop&w=500&q=60",
    },
    Service {
        icon: "🍷",
        title: "בר יינות מובחר",
        description: "מבחר יינות משובחים מהארץ ומהעולם שישלימו את חוויית הארוחה שלכם",
        image_url: "https://images.unsplash.com/photo-1510812431401-41d2bd2722f3?ixlib=rb-1.2.1&auto=format&fit=crop&w=500&q=60",
    },
    Service {
        icon: "🌿",
        title: "תפריט צמחוני ייחודי",
        description: "מגוון מנות צמחוניות וטבעוניות עשירות בטעמים ובחומרי גלם איכותיים",
        image_url: "https://images.unsplash.com/photo-1512621776951-a57141f2eefd?ixlib=rb-1.2.1&auto=format&fit=crop&w=500&q=60",
    },
    Service {
        icon: "👨‍🍳",
        title: "ערבי קולינריה מיוחדים",
        description: "סדנאות בישול וערבי טעימות בהנחיית השף שלנו לחוויה קולינרית מעשירה",
        image_url: "https://images.unsplash.com/photo-1577219491135-ce391730fb2c?ixlib=rb-1.2.1&auto=format&fit=crop&w=500&q=60",
    },
];

pub const GALLERY_IMAGES: &[GalleryImage] = &[
    GalleryImage {
        id: "img1",
        src: "https://images.unsplash.com/photo-1555396273-367ea4eb4db5?ixlib=rb-4.0.3&auto=format&fit=crop&w=1074&q=80",
        alt: "מנה מיוחדת של השף - סלמון צרוב עם ירקות עונתיים",
        width: 1074,
        height: 1000,
    },
    GalleryImage {
        id: "img2",
        src: "https://images.unsplash.com/photo-1414235077428-338989a2e8c0?ixlib=rb-4.0.3&auto=format&fit=crop&w=1170&q=80",
        alt: "אווירה חמה ומזמינה במסעדה בשעות הערב",
        width: 1170,
        height: 780,
    },
    GalleryImage {
        id: "img3",
        src: "https://images.unsplash.com/photo-1517248135467-4c7edcad34c4?ixlib=rb-4.0.3&auto=format&fit=crop&w=1170&q=80",
        alt: "חלל המסעדה המעוצב בסגנון מודרני ומזמין",
        width: 1170,
        height: 780,
    },
    GalleryImage {
        id: "img4",
        src: "https://images.unsplash.com/photo-1564759298141-cfd3e83bd4a8?ixlib=rb-4.0.3&auto=format&fit=crop&w=1170&q=80",
        alt: "קינוח מיוחד של השף - פבלובה עם פירות טריים",
        width: 1170,
        height: 780,
    },
    GalleryImage {
        id: "img5",
        src: "https://images.unsplash.com/photo-1551218808-94e220e084d2?ixlib=rb-4.0.3&auto=format&fit=crop&w=1074&q=80",
        alt: "מבחר יינות מובחרים מהארץ ומהעולם",
        width: 1074,
        height: 1000,
    },
    GalleryImage {
        id: "img6",
        src: "https://images.unsplash.com/photo-1600891964599-f61ba0e24092?ixlib=rb-4.0.3&auto=format&fit=crop&w=1170&q=80",
        alt: "מנת פתיחה - קרפצ׳יו בקר עם רוטב טרטר ביתי",
        width: 1170,
        height: 780,
    },
    GalleryImage {
        id: "img7",
        src: "https://images.unsplash.com/photo-1559339352-11d035aa65de?ixlib=rb-4.0.3&auto=format&fit=crop&w=1074&q=80",
        alt: "הטרסה החיצונית של המסעדה בשעות הערב",
        width: 1074,
        height: 1000,
    },
    GalleryImage {
        id: "img8",
        src: "https://images.unsplash.com/photo-1560611588-163f49a6cdd9?ixlib=rb-4.0.3&auto=format&fit=crop&w=1170&q=80",
        alt: "מנת דגל - ריזוטו פטריות עם כמהין",
        width: 1170,
        height: 780,
    },
];

/// Responsive `sizes` hint for gallery thumbnails.
pub const GALLERY_SIZES: &str = "(max-width: 640px) 100vw, (max-width: 1024px) 50vw, 33vw";

pub const TESTIMONIALS: &[Testimonial] = &[
    Testimonial {
        id: 1,
        name: "דניאל כהן",
        rating: 5,
        comment: "האוכל במסעדה גמא פשוט מדהים! השירות מהיר ואדיב, והאווירה נעימה ומזמינה. אני ממליץ בחום על המנות המיוחדות של השף.",
        image: "https://images.unsplash.com/photo-1507003211169-0a1dd7228f2d?ixlib=rb-1.2.1&auto=format&fit=crop&w=200&q=80",
    },
    Testimonial {
        id: 2,
        name: "מיכל לוי",
        rating: 5,
        comment: "ביקרתי במסעדה גמא עם משפחתי והיה נפלא! המנות טעימות, המחירים הוגנים והצוות מקצועי ואדיב. בהחלט נחזור בקרוב!",
        image: "https://images.unsplash.com/photo-1494790108377-be9c29b29330?ixlib=rb-1.2.1&auto=format&fit=crop&w=200&q=80",
    },
    Testimonial {
        id: 3,
        name: "יוסי אברהם",
        rating: 4,
        comment: "חוויה קולינרית מעולה! האוכל טרי וטעים, והאווירה מושלמת לארוחה רומנטית. ממליץ במיוחד על מנות הדגל של המסעדה.",
        image: "https://images.unsplash.com/photo-1500648767791-00dcc994a43e?ixlib=rb-1.2.1&auto=format&fit=crop&w=200&q=80",
    },
    Testimonial {
        id: 4,
        name: "רונית שרון",
        rating: 5,
        comment: "מסעדה גמא היא פנינה אמיתית! השילוב של טעמים, שירות מצוין ואווירה נעימה הופך כל ביקור לחוויה מיוחדת. מומלץ בחום!",
        image: "https://images.unsplash.com/photo-1438761681033-6461ffad8d80?ixlib=rb-1.2.1&auto=format&fit=crop&w=200&q=80",
    },
];

pub const FAQ_ITEMS: &[FaqItem] = &[
    FaqItem {
        id: "faq-1",
        question: "מה שעות הפעילות של המסעדה?",
        answer: "אנו פתוחים בימים א׳-ה׳ בין השעות 12:00-23:00, בימי שישי בין 12:00-16:00, ובמוצאי שבת משעה 19:00 עד 23:00. בשבתות המסעדה סגורה.",
    },
    FaqItem {
        id: "faq-2",
        question: "האם ניתן להזמין מקום מראש?",
        answer: "בהחלט! אנו ממליצים להזמין מקום מראש, במיוחד בסופי שבוע ובערבים. ניתן להזמין דרך האתר שלנו או בטלפון 03-1234567.",
    },
    FaqItem {
        id: "faq-3",
        question: "האם יש אפשרויות לתזונה מיוחדת (טבעוני, צמחוני, ללא גלוטן)?",
        answer: "כן, התפריט שלנו כולל מגוון אפשרויות לתזונה מיוחדת. יש לנו מנות טבעוניות, צמחוניות ומנות ללא גלוטן. נא לציין את הדרישות התזונתיות שלכם בעת ההזמנה ונשמח להתאים את המנות בהתאם.",
    },
    FaqItem {
        id: "faq-4",
        question: "האם יש חניה זמינה ליד המסעדה?",
        answer: "יש חניון ציבורי במרחק של 100 מטר מהמסעדה. בנוסף, בשעות הערב ניתן לחנות ברחובות הסמוכים ללא תשלום (אחרי השעה 19:00).",
    },
    FaqItem {
        id: "faq-5",
        question: "האם המסעדה נגישה לבעלי מוגבלויות?",
        answer: "כן, המסעדה שלנו נגישה לבעלי מוגבלויות. יש לנו רמפה בכניסה, שירותים מותאמים, ותפריטים בכתב ברייל. צוות המסעדה ישמח לסייע בכל צורך נוסף.",
    },
    FaqItem {
        id: "faq-6",
        question: "האם ניתן להזמין את המסעדה לאירועים פרטיים?",
        answer: "בהחלט! ניתן להזמין את המסעדה לאירועים פרטיים כמו ימי הולדת, אירועי חברה, או חגיגות משפחתיות. אנא צרו קשר עם מנהל האירועים שלנו בטלפון 03-1234568 לפרטים נוספים ותיאום.",
    },
    FaqItem {
        id: "faq-7",
        question: "האם יש תפריט ילדים?",
        answer: "כן, יש לנו תפריט מיוחד לילדים הכולל מנות אהובות כמו פסטה, שניצל, פיצה אישית ועוד. כל מנת ילדים מגיעה עם שתייה ומנת קינוח קטנה.",
    },
];

pub const OPENING_HOURS: &[&str] = &[
    "ראשון - חמישי: 12:00 - 23:00",
    "שישי: 12:00 - 16:00",
    "שבת: סגור",
];

pub const SOCIAL_LINKS: &[SocialLink] = &[
    SocialLink {
        id: "facebook",
        href: "https://facebook.com",
        aria_label: "עמוד הפייסבוק שלנו",
    },
    SocialLink {
        id: "instagram",
        href: "https://instagram.com",
        aria_label: "עמוד האינסטגרם שלנו",
    },
    SocialLink {
        id: "tripadvisor",
        href: "https://tripadvisor.com",
        aria_label: "עמוד הטריפאדוויזור שלנו",
    },
];

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn nav_items_point_at_page_sections() {
        for item in NAV_ITEMS {
            assert!(SECTION_IDS.contains(&item.id), "dangling anchor {}", item.id);
        }
    }

    #[test]
    fn ids_are_unique() {
        let faq: HashSet<_> = FAQ_ITEMS.iter().map(|f| f.id).collect();
        assert_eq!(faq.len(), FAQ_ITEMS.len());
        let gallery: HashSet<_> = GALLERY_IMAGES.iter().map(|g| g.id).collect();
        assert_eq!(gallery.len(), GALLERY_IMAGES.len());
        let testimonials: HashSet<_> = TESTIMONIALS.iter().map(|t| t.id).collect();
        assert_eq!(testimonials.len(), TESTIMONIALS.len());
        let sections: HashSet<_> = SECTION_IDS.iter().collect();
        assert_eq!(sections.len(), SECTION_IDS.len());
    }

    #[test]
    fn gallery_images_declare_dimensions() {
        for image in GALLERY_IMAGES {
            assert!(image.width > 0 && image.height > 0, "{}", image.id);
            assert!(!image.alt.is_empty());
        }
    }
}

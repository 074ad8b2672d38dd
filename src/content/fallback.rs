//! Static fallback content
//!
//! Hand-authored content served whenever neither the cache nor the CMS can
//! supply a category. These sets are never mutated at runtime.

use super::{
    AboutContent, CarouselItem, DesignItem, GarmentType, HomeContent, SilhouetteItem,
};

struct DesignSeed {
    id: &'static str,
    title: &'static str,
    description: &'static str,
    image_url: &'static str,
    price: &'static str,
    category: GarmentType,
}

struct SilhouetteSeed {
    id: &'static str,
    title: &'static str,
    description: &'static str,
    image_url: &'static str,
}

struct CarouselSeed {
    title: &'static str,
    description: &'static str,
    image: &'static str,
}

/// Gallery designs, grouped jacket, pants, vest, shirt
static DESIGNS: [DesignSeed; 5] = [
    DesignSeed {
        id: "design-1",
        title: "Santa Fe Worker Jacket",
        description: "Classic workwear-inspired jacket with southwestern patterns and custom brass hardware.",
        image_url: "https://images.unsplash.com/photo-1591047139829-d91aecb6caea",
        price: "850",
        category: GarmentType::Jacket,
    },
    DesignSeed {
        id: "design-3",
        title: "Taos Chore Coat",
        description: "Utilitarian chore coat with turquoise-inspired embroidery details and hidden internal pocket.",
        image_url: "https://images.unsplash.com/photo-1617137968427-85924c800a22",
        price: "795",
        category: GarmentType::Jacket,
    },
    DesignSeed {
        id: "design-2",
        title: "Mesa High-Rise Trousers",
        description: "Tailored high-rise trousers with side adjusters and extended waistband in earthy tones.",
        image_url: "https://images.unsplash.com/photo-1594938291221-94f18cbb5660",
        price: "650",
        category: GarmentType::Pants,
    },
    DesignSeed {
        id: "design-4",
        title: "Coyote Leather Vest",
        description: "Hand-stitched leather vest with traditional embroidery patterns and western-style fasteners.",
        image_url: "https://images.unsplash.com/photo-1598522325074-042db73aa4e6",
        price: "725",
        category: GarmentType::Vest,
    },
    DesignSeed {
        id: "design-5",
        title: "Saguaro Western Shirt",
        description: "Classic western-style shirt with pearl snaps and subtle cactus-inspired embroidery.",
        image_url: "https://images.unsplash.com/photo-1611312449408-fcece27cdbb7",
        price: "550",
        category: GarmentType::Shirt,
    },
];

static SILHOUETTES: [SilhouetteSeed; 3] = [
    SilhouetteSeed {
        id: "outfit-1",
        title: "Santa Fe Sunset",
        description: "A versatile southwestern ensemble combining structured workwear with relaxed desert comfort.",
        image_url: "https://images.unsplash.com/photo-1591047139829-d91aecb6caea",
    },
    SilhouetteSeed {
        id: "outfit-2",
        title: "Taos Trail",
        description: "A rugged yet refined combination that transitions effortlessly from outdoor exploration to evening gatherings.",
        image_url: "https://images.unsplash.com/photo-1617137968427-85924c800a22",
    },
    SilhouetteSeed {
        id: "outfit-3",
        title: "Desert Dusk",
        description: "An elevated take on southwestern style, perfect for special occasions with a distinctive regional character.",
        image_url: "https://images.unsplash.com/photo-1598522325074-042db73aa4e6",
    },
];

static CAROUSEL: [CarouselSeed; 4] = [
    CarouselSeed {
        title: "Desert Sunset Jacket",
        description: "Hand-stitched with a gradient pattern inspired by southwestern sunsets.",
        image: "https://images.unsplash.com/photo-1591047139829-d91aecb6caea",
    },
    CarouselSeed {
        title: "Cactus Blossom Collection",
        description: "Detailed embroidery on sustainable fabrics, celebrating desert flora.",
        image: "https://images.unsplash.com/photo-1594938291221-94f18cbb5660",
    },
    CarouselSeed {
        title: "Mesa Verde Overcoat",
        description: "Inspired by ancient pueblo dwellings, featuring geometric patterns and earthy tones.",
        image: "https://images.unsplash.com/photo-1617137968427-85924c800a22",
    },
    CarouselSeed {
        title: "Navajo-Inspired Weave",
        description: "Modern apparel with traditional Navajo-inspired patterns and techniques.",
        image: "https://images.unsplash.com/photo-1598522325074-042db73aa4e6",
    },
];

const ABOUT_TITLE: &str = "The Story Behind All Hat and No Cattle";
const ABOUT_CONTENT: &str = "<p>All Hat and No Cattle began in the heart of the Southwest, inspired by the region's rich textile traditions and the beauty of its landscapes.</p>\
<p>The name embraces the paradox of modern fashion: we create pieces with genuine substance beneath their striking appearance. Each garment tells a story of the land, people, and traditions that inspire us.</p>";
const ABOUT_IMAGE: &str = "https://images.unsplash.com/photo-1590838290859-656255f80f1e";

const HOME_TITLE: &str = "Custom Southwestern Apparel";
const HOME_CONTENT: &str = "<p>Handcrafted garments with authentic southwestern style, designed and made with meticulous attention to detail.</p>";
const HOME_BANNER: &str = "https://images.unsplash.com/photo-1582418702059-97ebafb35d09";

pub fn designs() -> Vec<DesignItem> {
    DESIGNS
        .iter()
        .map(|seed| DesignItem {
            id: seed.id.to_string(),
            title: seed.title.to_string(),
            description: seed.description.to_string(),
            image_url: seed.image_url.to_string(),
            price: seed.price.to_string(),
            category: seed.category,
        })
        .collect()
}

pub fn silhouettes() -> Vec<SilhouetteItem> {
    SILHOUETTES
        .iter()
        .map(|seed| SilhouetteItem {
            id: seed.id.to_string(),
            title: seed.title.to_string(),
            description: seed.description.to_string(),
            image_url: seed.image_url.to_string(),
        })
        .collect()
}

pub fn about_content() -> AboutContent {
    AboutContent {
        title: ABOUT_TITLE.to_string(),
        content: ABOUT_CONTENT.to_string(),
        featured_image: ABOUT_IMAGE.to_string(),
    }
}

pub fn home_content() -> HomeContent {
    HomeContent {
        title: HOME_TITLE.to_string(),
        content: HOME_CONTENT.to_string(),
        banner_image: HOME_BANNER.to_string(),
        carousel_items: CAROUSEL
            .iter()
            .map(|seed| CarouselItem {
                title: seed.title.to_string(),
                description: seed.description.to_string(),
                image: seed.image.to_string(),
            })
            .collect(),
    }
}

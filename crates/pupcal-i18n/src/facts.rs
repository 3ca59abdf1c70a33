//! Compiled-in English facts, used when no pack supplies any.

pub const DEFAULT_FACTS: &[&str] = &[
    "Stabyhoun Fact: The name 'Stabyhoun' roughly translates from Frisian to 'Stand by me dog'.",
    "Stabyhoun Fact: They are one of the top 5 rarest dog breeds in the world.",
    "Breed Fact: Stabyhouns originate from the province of Friesland in the Netherlands.",
    "Breed Fact: Historically, they were the 'poor man's dog', capable of hunting, guarding, and catching moles.",
    "Breed Fact: Stabyhouns are known for having a 'soft mouth', meaning they can retrieve game without damaging it.",
    "Breed Fact: Unlike many hunting breeds, the Stabyhoun is known to be an independent thinker and can be stubborn.",
    "Development: At 8 weeks, puppies are in a 'fear imprint' stage. Positive experiences are crucial right now.",
    "Health: A puppy's growth plates are soft and don't close until 12-18 months. This is why we limit walking time.",
    "Fun Fact: Stabyhouns love water! They were often used to retrieve ducks.",
    "Grooming: The Stabyhoun is 'self-cleaning'. Dirt usually falls off their coat once it dries.",
    "Breed Fact: The tips of a Stabyhoun's ears often have shorter hair at the bottom, unlike other spaniels.",
    "Training: Stabyhouns respond very poorly to harsh discipline. They need positive, cheerful motivation.",
    "Activity: Mental stimulation (sniffing, puzzles) tires a puppy out 3x faster than physical walking.",
    "History: During WWII, the breed was kept safe by farmers in Friesland, recognized officially in 1942.",
    "Development: At 12 weeks, your puppy's permanent teeth will start pushing out the milk teeth.",
    "Fun Fact: 'Stabij' is the common nickname for the breed in the Netherlands.",
    "Sleep: Puppies this age need 18-20 hours of sleep a day to grow properly.",
    "Breed Fact: Most Stabyhouns are black and white, but brown and white exists and is quite rare.",
    "Breed Fact: Orange and white Stabyhouns are nearly extinct.",
    "Socialization: The 'Rule of 12' suggests meeting 12 new people, surfaces, and sounds by 12 weeks.",
    "History: Stabyhouns were historically used to churn butter by walking on a treadmill device.",
    "Temperament: Stabyhouns are known to be excellent with children and other pets.",
    "Anatomy: They are slightly longer than they are tall.",
    "Fun Fact: The Stabyhoun has a very keen sense of smell, originally used to track moles underground.",
    "Training: Recall training starts now! Use their name and high-value treats.",
    "Health: Avoid stairs and jumping in and out of cars to protect their joints.",
    "Fact: Dogs have sweat glands only in their paw pads.",
    "Fact: A dog's nose print is as unique as a human fingerprint.",
    "Development: By 16 weeks, the critical socialization window begins to close.",
    "Breed Fact: In the Netherlands, they are often seen as national treasures.",
    "Fun Fact: Stabyhouns are not usually barkers, but they will alert you if something is wrong.",
    "Activity: A 10-minute sniff walk is better than a 20-minute power walk for a puppy.",
    "Diet: Puppies grow fast! Monitor their weight weekly to adjust food portions.",
    "Bonding: Hand-feeding your puppy can help prevent resource guarding.",
    "Breed Fact: The Stabyhoun tail usually has a white tip.",
    "Activity: Swimming is great low-impact exercise for Stabyhouns once the water is warm enough.",
];

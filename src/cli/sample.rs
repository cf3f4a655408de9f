/// Sequence tallied when none is given on the command line.
pub const SEQUENCE: &str = concat!(
    "TGGATGCGGTGAATAGCAGTACACTCGTGCTTCTCGCTCATCTGACTATATCTCACTGGAAAGTGCTTGGGTTTAAGGCGGAGTATGGGCTCAAGCCCTA",
    "GATGCCCCAATCTAGTGAACGACTACAGTGCCAGTGGTATACCGGCTAACCCATCTCAAGAATGCCTACCGGTGGGCAGCCTAAGGGGAGTCGCCGGTTA",
    "AACTCGTGCACTGTCGCTGACTTCACGGGACTGCAAGCATTGCACATTTAAACGCTACCCGAAAGCTTTACTGTCTAGAGTAGTTAGTATAGCAGCTTGC",
    "GGGTCAGCATCGCCGTATGAATATAATAGGCCCCATGCGCGAACGGGGGCTAGACGGCACTAACTAAATATAGCATTAGCTAGAGCTATGCATGGTAAGA",
    "GAACAGACAAGAGGGTAAGTTCTGTCCTATCTTTAGTTTTGCCACCCTTTTCCCCTCATCTTGGCTCGCGGTTCCAGCCAGTATATCCGCATCTGTCCTC",
    "TCGTTGACCTCGAGGTAGCTGCCTTATAGACTCATAAGGGTCTACATCTTGGATGTTGGGGAATCTGTTATCAAACGAGCCGTACATTACCTAGGATGAT",
    "TAGTAGGATAGTTGCTGAATGACTCTGGGGGCGAAGGAATTTTACGAAATACCCAAGAGAGGCTCGCGAGAATCGGCGGCACAAGGGACAGTTTCTAGCA",
    "CCGCTTTTCGGAGCATGGTAATTGGTACCACGGATAACGCTGGTCGGCTCAGCCTCAAGCCCGCTATCCGCAGTAGTGATAGCTTTATACCTCAGGGAAC",
    "ATGTGCTGCTTTTCGAGAGAAAGCAA",
);
